//! The per-platform publishing boundary.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use jobboard_core::config::SocialConfig;
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_entity::Job;

use crate::error::PublishError;
use crate::slack::SlackPublisher;
use crate::twitter::TwitterPublisher;

/// One social platform a job can be announced on.
#[async_trait]
pub trait SocialPublisher: Send + Sync + std::fmt::Debug {
    /// Short platform name used in logs.
    fn platform(&self) -> &'static str;

    /// Whether the platform has the credentials it needs.
    fn is_enabled(&self) -> bool;

    /// Announce one job. A failure concerns this platform only.
    async fn publish(&self, job: &Job) -> Result<(), PublishError>;
}

/// Builds the shared HTTP client for outbound platform calls.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("jobboard/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                "Failed to build social HTTP client",
                e,
            )
        })
}

/// Builds a publisher for every platform that is configured.
///
/// Platforms with an empty credential are left out.
pub fn build_publishers(
    config: &SocialConfig,
    base_url: &str,
    timeout: Duration,
) -> Result<Vec<Arc<dyn SocialPublisher>>, AppError> {
    let client = http_client(timeout)?;
    let mut publishers: Vec<Arc<dyn SocialPublisher>> = Vec::new();

    if config.slack_enabled() {
        publishers.push(Arc::new(SlackPublisher::new(
            client.clone(),
            config.slack_webhook_url.clone(),
            base_url,
        )));
    }

    if config.twitter_enabled() {
        publishers.push(Arc::new(TwitterPublisher::new(
            client,
            config.twitter_api_url.clone(),
            config.twitter_access_token.clone(),
            base_url,
        )));
    }

    info!(
        platforms = ?publishers.iter().map(|p| p.platform()).collect::<Vec<_>>(),
        "Social publishers configured"
    );

    Ok(publishers)
}
