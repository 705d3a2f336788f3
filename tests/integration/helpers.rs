//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::Duration;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use jobboard_api::{AppState, LinkMailer, build_router};
use jobboard_auth::{LinkBuilder, LinkSigner};
use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_database::{JobStore, MemoryStore, UserStore};
use jobboard_entity::{Job, NewJob, User};

pub const BASE_URL: &str = "http://jobs.test";
pub const SECRET: &str = "integration-secret";

/// Mailer remembering every verification link it was asked to deliver
#[derive(Debug, Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(Uuid, String)>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<(Uuid, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkMailer for RecordingMailer {
    async fn send_verification(&self, user: &User, verify_url: &str) -> AppResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((user.id, verify_url.to_string()));
        Ok(())
    }
}

/// Store whose every call fails like a lost database connection
#[derive(Debug)]
pub struct OfflineStore;

fn offline<T>() -> AppResult<T> {
    Err(AppError::database("connection refused"))
}

#[async_trait]
impl JobStore for OfflineStore {
    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        offline()
    }
    async fn find_job(&self, _id: Uuid) -> AppResult<Option<Job>> {
        offline()
    }
    async fn list_due_for_social_post(&self) -> AppResult<Vec<Job>> {
        offline()
    }
    async fn create_job(&self, _form: &NewJob) -> AppResult<Job> {
        offline()
    }
    async fn save_job(&self, _job: &Job) -> AppResult<()> {
        offline()
    }
    async fn set_published_to_socials(&self, _id: Uuid, _value: bool) -> AppResult<()> {
        offline()
    }
    async fn delete_older_than(&self, _max_age: Duration) -> AppResult<u64> {
        offline()
    }
    async fn ping(&self) -> AppResult<()> {
        offline()
    }
}

#[async_trait]
impl UserStore for OfflineStore {
    async fn find_user(&self, _id: Uuid) -> AppResult<Option<User>> {
        offline()
    }
    async fn find_user_by_email(&self, _email: &str) -> AppResult<Option<User>> {
        offline()
    }
    async fn get_or_create_user(&self, _email: &str) -> AppResult<User> {
        offline()
    }
    async fn set_user_verified(&self, _id: Uuid, _verified: bool) -> AppResult<()> {
        offline()
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, shared with the router
    pub store: MemoryStore,
    /// Link builder using the same secret as the router
    pub links: LinkBuilder,
    /// Captured verification links
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let store = MemoryStore::new();
        Self::with_stores(store.clone(), Arc::new(store.clone()), Arc::new(store))
    }

    /// Jobs in memory, every user store call failing
    pub fn with_offline_users() -> Self {
        let store = MemoryStore::new();
        Self::with_stores(store.clone(), Arc::new(store), Arc::new(OfflineStore))
    }

    /// Every job store call failing
    pub fn with_offline_jobs() -> Self {
        let store = MemoryStore::new();
        Self::with_stores(store.clone(), Arc::new(OfflineStore), Arc::new(store))
    }

    fn with_stores(
        store: MemoryStore,
        jobs: Arc<dyn JobStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        let mailer = Arc::new(RecordingMailer::default());
        let links = LinkBuilder::new(BASE_URL, LinkSigner::new(SECRET));

        let state = AppState::new(jobs, users, links.clone(), mailer.clone());

        Self {
            router: build_router(state),
            store,
            links,
            mailer,
        }
    }

    /// Send a request without a body
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Send an `application/x-www-form-urlencoded` POST
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Submit a valid job for `email`, returning the response data
    pub async fn submit_job(&self, position: &str, email: &str) -> Value {
        let response = self
            .post_form(
                "/jobs",
                &[
                    ("position", position),
                    ("organization", "Acme"),
                    ("url", "https://acme.example/careers/1"),
                    ("description", ""),
                    ("email", email),
                ],
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"].clone()
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let raw = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, raw }
    }
}

/// Path and query of an absolute link issued by the app
pub fn path_of(url: &str) -> &str {
    url.strip_prefix(BASE_URL).expect("link outside base url")
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw body text
    pub raw: String,
}
