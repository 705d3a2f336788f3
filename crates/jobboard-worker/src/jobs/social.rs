//! Social-publish sweep: announces jobs of verified posters.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing;

use jobboard_database::JobStore;
use jobboard_entity::Job;
use jobboard_social::{PublishError, SocialPublisher};

use crate::sweep::{Sweep, SweepError};

/// Posts every due job to each enabled platform, then marks it published
///
/// A job is marked after all platforms were attempted, whatever their
/// outcome, so it is never posted twice and never retried.
#[derive(Debug)]
pub struct SocialPublishSweep {
    /// Job store
    store: Arc<dyn JobStore>,
    /// Platform publishers
    publishers: Vec<Arc<dyn SocialPublisher>>,
    /// Upper bound per platform call
    timeout: Duration,
}

impl SocialPublishSweep {
    /// Create a new social-publish sweep
    pub fn new(
        store: Arc<dyn JobStore>,
        publishers: Vec<Arc<dyn SocialPublisher>>,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            publishers,
            timeout,
        }
    }

    /// Attempt every enabled platform for one job
    async fn publish_everywhere(&self, job: &Job) {
        for publisher in self.publishers.iter().filter(|p| p.is_enabled()) {
            let result = match tokio::time::timeout(self.timeout, publisher.publish(job)).await {
                Ok(result) => result,
                Err(_) => Err(PublishError::Timeout(self.timeout)),
            };

            match result {
                Ok(()) => tracing::info!(
                    "Posted job {} to {}",
                    job.id,
                    publisher.platform()
                ),
                Err(e) => tracing::warn!(
                    "Failed to post job {} to {}: {}",
                    job.id,
                    publisher.platform(),
                    e
                ),
            }
        }
    }
}

#[async_trait]
impl Sweep for SocialPublishSweep {
    fn name(&self) -> &str {
        "social_publish"
    }

    async fn run(&self) -> Result<u64, SweepError> {
        let due = self.store.list_due_for_social_post().await?;
        if due.is_empty() {
            tracing::debug!("No jobs due for social posting");
            return Ok(0);
        }

        tracing::info!("{} job(s) due for social posting", due.len());

        let mut marked = 0;
        for job in &due {
            self.publish_everywhere(job).await;

            match self.store.set_published_to_socials(job.id, true).await {
                Ok(()) => marked += 1,
                Err(e) => {
                    tracing::error!("Failed to mark job {} as published: {}", job.id, e);
                }
            }
        }

        Ok(marked)
    }
}
