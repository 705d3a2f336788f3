//! Retention sweep: deletes job postings past their lifetime.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tracing;

use jobboard_database::JobStore;

use crate::sweep::{Sweep, SweepError};

/// Deletes every job published longer ago than the retention period
#[derive(Debug)]
pub struct RetentionSweep {
    /// Job store
    store: Arc<dyn JobStore>,
    /// Maximum job age
    max_age: Duration,
}

impl RetentionSweep {
    /// Create a new retention sweep
    pub fn new(store: Arc<dyn JobStore>, max_age: Duration) -> Self {
        Self { store, max_age }
    }

    /// Create a sweep keeping jobs for `days` days
    pub fn with_retention_days(store: Arc<dyn JobStore>, days: u32) -> Self {
        Self::new(store, Duration::days(i64::from(days)))
    }
}

#[async_trait]
impl Sweep for RetentionSweep {
    fn name(&self) -> &str {
        "retention"
    }

    async fn run(&self) -> Result<u64, SweepError> {
        let deleted = self.store.delete_older_than(self.max_age).await?;

        if deleted > 0 {
            tracing::info!(
                "Retention sweep removed {} job(s) older than {} days",
                deleted,
                self.max_age.num_days()
            );
        } else {
            tracing::debug!("Retention sweep found nothing to remove");
        }

        Ok(deleted)
    }
}
