//! One idempotent maintenance pass.

use async_trait::async_trait;

use jobboard_core::error::AppError;

/// Trait for maintenance passes executed by the task runner
#[async_trait]
pub trait Sweep: Send + Sync + std::fmt::Debug {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Run one pass, returning the number of jobs it affected
    async fn run(&self) -> Result<u64, SweepError>;
}

/// Error from a sweep pass
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The store could not be read or written
    #[error("Store error: {0}")]
    Store(#[from] AppError),
}
