//! Per-request time limit.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Answers 408 when the inner handler does not finish within `limit`.
pub async fn request_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(path = %path, limit_ms = %limit.as_millis(), "Request timed out");
            StatusCode::REQUEST_TIMEOUT.into_response()
        }
    }
}
