//! Axum middleware stack.

pub mod logging;
pub mod signed;
pub mod timeout;
