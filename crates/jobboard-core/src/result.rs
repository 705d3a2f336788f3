//! Convenience result type alias for the job board.

use crate::error::AppError;

/// A specialized `Result` type for job board operations.
pub type AppResult<T> = Result<T, AppError>;
