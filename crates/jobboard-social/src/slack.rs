//! Slack incoming-webhook publisher.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use jobboard_entity::Job;

use crate::error::{PublishError, check_response};
use crate::message::announcement;
use crate::publisher::SocialPublisher;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Posts announcements to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackPublisher {
    client: reqwest::Client,
    webhook_url: String,
    base_url: String,
}

impl SlackPublisher {
    /// Creates a publisher posting to `webhook_url`.
    pub fn new(client: reqwest::Client, webhook_url: String, base_url: &str) -> Self {
        Self {
            client,
            webhook_url,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SocialPublisher for SlackPublisher {
    fn platform(&self) -> &'static str {
        "slack"
    }

    fn is_enabled(&self) -> bool {
        !self.webhook_url.trim().is_empty()
    }

    async fn publish(&self, job: &Job) -> Result<(), PublishError> {
        let text = announcement(job, &self.base_url);
        debug!(job_id = %job.id, "Posting job to Slack");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookPayload { text: &text })
            .send()
            .await?;

        check_response(response).await
    }
}
