//! # jobboard-api
//!
//! HTTP API layer for the job board built on Axum.
//!
//! Provides the public listing and submission endpoints, the signed-link
//! guarded edit and verification endpoints, request logging, and the
//! mapping from `AppError` to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mailer;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use mailer::{LinkMailer, LogMailer};
pub use router::build_router;
pub use state::AppState;
