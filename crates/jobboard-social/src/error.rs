//! Publishing failures.

use std::time::Duration;

/// Why a post to one platform failed.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The platform answered with a non-success status.
    #[error("rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// No answer within the allotted time.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl PublishError {
    /// Builds a rejection, keeping at most 512 bytes of the body.
    pub fn rejected(status: u16, body: &str) -> Self {
        let mut end = body.len().min(512);
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        Self::Rejected {
            status,
            body: body[..end].to_string(),
        }
    }
}

/// Turns a platform response into `Ok` or a [`PublishError::Rejected`].
pub(crate) async fn check_response(response: reqwest::Response) -> Result<(), PublishError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(PublishError::rejected(status.as_u16(), &body))
}
