//! Signed-link guarded job edit and update.

use chrono::Duration;
use http::StatusCode;
use uuid::Uuid;

use jobboard_database::JobStore;
use jobboard_entity::Job;

use crate::helpers::{TestApp, path_of};

async fn created_job(app: &TestApp) -> (Job, String) {
    let data = app.submit_job("Engineer", "poster@acme.example").await;
    let job: Job = serde_json::from_value(data["job"].clone()).unwrap();
    let edit_url = data["edit_url"].as_str().unwrap().to_string();
    (job, edit_url)
}

fn update_fields<'a>(position: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("position", position),
        ("organization", "Acme Corp"),
        ("url", ""),
        ("description", "Fully remote"),
        ("email", "attacker@evil.example"),
    ]
}

#[tokio::test]
async fn test_edit_with_valid_token_prefills_form() {
    let app = TestApp::new();
    let (job, edit_url) = created_job(&app).await;

    let response = app.get(path_of(&edit_url)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["form"]["position"], "Engineer");
    assert_eq!(response.body["data"]["form"]["url"], "https://acme.example/careers/1");
    assert_eq!(response.body["data"]["form"]["description"], "");
    assert_eq!(
        response.body["data"]["update_url"],
        app.links.signed_url(&job, None)
    );
}

#[tokio::test]
async fn test_edit_with_wrong_token_is_bare_403() {
    let app = TestApp::new();
    let (job, _) = created_job(&app).await;

    let response = app.get(&format!("/jobs/{}/edit?token=forged", job.id)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.raw.is_empty());

    let response = app.get(&format!("/jobs/{}/edit", job.id)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_repeated_token_parameter_is_bare_403() {
    let app = TestApp::new();
    let (job, edit_url) = created_job(&app).await;

    let response = app
        .get(&format!("/jobs/{}/edit?token=a&token=b", job.id))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.raw.is_empty());

    let token = edit_url.split_once("token=").unwrap().1;
    let response = app
        .get(&format!("/jobs/{}/edit?token={token}&token={token}", job.id))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.raw.is_empty());
}

#[tokio::test]
async fn test_edit_unknown_job_is_server_fault() {
    let app = TestApp::new();
    let response = app
        .get(&format!("/jobs/{}/edit?token=anything", Uuid::new_v4()))
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_update_with_valid_token() {
    let app = TestApp::new();
    let (job, _) = created_job(&app).await;
    let update_url = app.links.signed_url(&job, None);

    let response = app
        .post_form(path_of(&update_url), &update_fields("Staff Engineer"))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let stored = app.store.find_job(job.id).await.unwrap().unwrap();
    assert_eq!(stored.position, "Staff Engineer");
    assert_eq!(stored.organization, "Acme Corp");
    assert_eq!(stored.url, None);
    assert_eq!(stored.description.as_deref(), Some("Fully remote"));
    assert_eq!(stored.email, job.email);
    assert_eq!(stored.published_at, job.published_at);

    // Signing fields are untouched, so the same link keeps working.
    let again = app
        .post_form(path_of(&update_url), &update_fields("Principal Engineer"))
        .await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_with_wrong_token_changes_nothing() {
    let app = TestApp::new();
    let (job, _) = created_job(&app).await;

    let response = app
        .post_form(
            &format!("/jobs/{}?token=forged", job.id),
            &update_fields("Hijacked"),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let stored = app.store.find_job(job.id).await.unwrap().unwrap();
    assert_eq!(stored, job);
}

#[tokio::test]
async fn test_update_with_invalid_form_changes_nothing() {
    let app = TestApp::new();
    let (job, _) = created_job(&app).await;
    let update_url = app.links.signed_url(&job, None);

    let response = app
        .post_form(
            path_of(&update_url),
            &[("position", ""), ("organization", "Acme"), ("url", "not a url")],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["details"]["errors"]["position"],
        "Must provide a Position"
    );
    assert_eq!(
        response.body["details"]["errors"]["url"],
        "Must provide a valid Url"
    );
    assert!(response.body["details"]["errors"].get("email").is_none());

    let stored = app.store.find_job(job.id).await.unwrap().unwrap();
    assert_eq!(stored, job);
}

#[tokio::test]
async fn test_changing_publish_timestamp_revokes_links() {
    let app = TestApp::new();
    let (job, edit_url) = created_job(&app).await;

    let mut moved = job.clone();
    moved.published_at = job.published_at - Duration::hours(1);
    app.store.insert_job(moved).await;

    let response = app.get(path_of(&edit_url)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_job_token_does_not_open_other_job() {
    let app = TestApp::new();
    let (first, _) = created_job(&app).await;
    let (second, _) = created_job(&app).await;

    let token = app.links.signer().sign(&first);
    let response = app
        .get(&format!("/jobs/{}/edit?token={}", second.id, token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
