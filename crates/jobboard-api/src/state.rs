//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Duration;

use jobboard_auth::LinkBuilder;
use jobboard_database::{JobStore, UserStore};

use crate::mailer::LinkMailer;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Job postings
    pub jobs: Arc<dyn JobStore>,
    /// Email identities
    pub users: Arc<dyn UserStore>,
    /// Signed link construction and verification
    pub links: Arc<LinkBuilder>,
    /// Delivery of verification links
    pub mailer: Arc<dyn LinkMailer>,
    /// Upper bound for handling one request
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates the state from its collaborators.
    pub fn new(
        jobs: Arc<dyn JobStore>,
        users: Arc<dyn UserStore>,
        links: LinkBuilder,
        mailer: Arc<dyn LinkMailer>,
    ) -> Self {
        Self {
            jobs,
            users,
            links: Arc::new(links),
            mailer,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Overrides the per-request time limit.
    pub fn with_request_timeout(mut self, limit: Duration) -> Self {
        self.request_timeout = limit;
        self
    }
}
