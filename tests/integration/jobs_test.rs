//! Listing, submission and public view of jobs.

use chrono::{Duration, Utc};
use http::StatusCode;
use uuid::Uuid;

use jobboard_database::{JobStore, UserStore};
use jobboard_entity::Job;

use crate::helpers::{BASE_URL, TestApp, path_of};

#[tokio::test]
async fn test_create_job_returns_signed_edit_link() {
    let app = TestApp::new();
    let data = app.submit_job("Backend Engineer", "hiring@acme.example").await;

    let id = data["job"]["id"].as_str().unwrap();
    let edit_url = data["edit_url"].as_str().unwrap();
    assert!(edit_url.starts_with(&format!("{BASE_URL}/jobs/{id}/edit?token=")));
    assert_eq!(data["job"]["published_to_socials"], false);
    assert_eq!(data["job"]["description"], serde_json::Value::Null);

    let stored = app
        .store
        .find_job(Uuid::parse_str(id).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.position, "Backend Engineer");

    let edit = app.get(path_of(edit_url)).await;
    assert_eq!(edit.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_job_sends_verification_to_new_poster() {
    let app = TestApp::new();
    app.submit_job("Engineer", "new@acme.example").await;
    app.submit_job("Designer", "new@acme.example").await;

    let user = app
        .store
        .find_user_by_email("new@acme.example")
        .await
        .unwrap()
        .unwrap();
    assert!(!user.verified);
    assert_eq!(app.store.user_count().await, 1);

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|(id, _)| *id == user.id));
    assert!(sent[0].1.starts_with(&format!("{BASE_URL}/users/{}/verify?token=", user.id)));
}

#[tokio::test]
async fn test_verified_poster_gets_no_verification_mail() {
    let app = TestApp::new();
    let user = app.store.get_or_create_user("known@acme.example").await.unwrap();
    app.store.set_user_verified(user.id, true).await.unwrap();

    app.submit_job("Engineer", "known@acme.example").await;
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_invalid_submission_reports_every_field() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/jobs",
            &[("position", ""), ("organization", ""), ("email", "not-an-email")],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = &response.body["details"]["errors"];
    assert_eq!(errors["position"], "Must provide a Position");
    assert_eq!(errors["organization"], "Must provide a Organization");
    assert_eq!(errors["url"], "Must provide either a Url or a Description");
    assert_eq!(errors["email"], "Must provide a valid Email");
    assert_eq!(response.body["details"]["form"]["email"], "not-an-email");

    assert_eq!(app.store.job_count().await, 0);
    assert_eq!(app.store.user_count().await, 0);
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_missing_email_on_create() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/jobs",
            &[
                ("position", "Engineer"),
                ("organization", "Acme"),
                ("description", "Remote"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["details"]["errors"]["email"],
        "Must provide an Email Address"
    );
}

#[tokio::test]
async fn test_index_lists_newest_first() {
    let app = TestApp::new();
    for (position, days) in [("Old", 5), ("Newest", 0), ("Middle", 2)] {
        app.store
            .insert_job(Job {
                id: Uuid::new_v4(),
                position: position.to_string(),
                organization: "Acme".to_string(),
                url: None,
                description: Some("Remote".to_string()),
                email: "a@acme.example".to_string(),
                published_at: Utc::now() - Duration::days(days),
                published_to_socials: false,
            })
            .await;
    }

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);

    let positions: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["position"].as_str().unwrap())
        .collect();
    assert_eq!(positions, vec!["Newest", "Middle", "Old"]);
}

#[tokio::test]
async fn test_view_job_is_public() {
    let app = TestApp::new();
    let data = app.submit_job("Engineer", "a@acme.example").await;
    let id = data["job"]["id"].as_str().unwrap();

    let response = app.get(&format!("/jobs/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["position"], "Engineer");
}

#[tokio::test]
async fn test_view_unknown_job_is_404() {
    let app = TestApp::new();
    let response = app.get(&format!("/jobs/{}", Uuid::new_v4())).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_new_form_is_blank() {
    let app = TestApp::new();
    let response = app.get("/new").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["position"], "");
    assert_eq!(response.body["data"]["email"], "");
}

#[tokio::test]
async fn test_failed_user_upsert_stores_no_job() {
    let app = TestApp::with_offline_users();
    let response = app
        .post_form(
            "/jobs",
            &[
                ("position", "Engineer"),
                ("organization", "Acme"),
                ("url", "https://acme.example/careers/1"),
                ("email", "poster@acme.example"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.store.job_count().await, 0);
    assert!(app.mailer.sent().is_empty());
}
