//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An email identity.
///
/// Users are created lazily the first time a job is posted with their
/// email address. There is at most one row per email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address (unique).
    pub email: String,
    /// Whether the owner confirmed the address through a signed link.
    pub verified: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
