//! Job posting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::form::NewJob;

/// A job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier, generated by the store.
    pub id: Uuid,
    /// Position title.
    pub position: String,
    /// Hiring organization.
    pub organization: String,
    /// Link to the full posting.
    pub url: Option<String>,
    /// Markdown source of the description.
    pub description: Option<String>,
    /// Contact email of the poster.
    pub email: String,
    /// When the job was published.
    pub published_at: DateTime<Utc>,
    /// Whether the job was already handed to the social publishers.
    pub published_to_socials: bool,
}

impl Job {
    /// Apply an authorized edit.
    ///
    /// Only position, organization, url and description change. The
    /// identity, email and publish timestamp stay untouched, so links issued
    /// for this job keep working after the edit. Text fields are trimmed the
    /// same way the stores trim them on creation.
    pub fn apply_update(&mut self, form: &NewJob) {
        self.position = form.position.trim().to_string();
        self.organization = form.organization.trim().to_string();
        self.url = non_empty(&form.url);
        self.description = non_empty(&form.description);
    }
}

/// Map a blank form value to `None`.
pub fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
