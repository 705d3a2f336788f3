//! Response DTOs.

use serde::{Deserialize, Serialize};

use jobboard_entity::{Job, NewJob, User};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Result of a job submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedJobResponse {
    /// The stored job.
    pub job: Job,
    /// Signed link to the edit form. Only handed out once.
    pub edit_url: String,
}

/// Data for the edit form of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditJobResponse {
    /// The stored job.
    pub job: Job,
    /// Form prefilled with the current values.
    pub form: NewJob,
    /// Signed link the form submits to.
    pub update_url: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Result of an email verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedUserResponse {
    /// The verified user.
    pub user: User,
}
