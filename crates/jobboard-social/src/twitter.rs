//! Twitter (X) API v2 publisher.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use jobboard_entity::Job;

use crate::error::{PublishError, check_response};
use crate::message::{TWEET_MAX_CHARS, announcement, truncate_post};
use crate::publisher::SocialPublisher;

#[derive(Debug, Serialize)]
struct CreateTweet {
    text: String,
}

/// Posts announcements as tweets with a bearer access token.
#[derive(Clone)]
pub struct TwitterPublisher {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
    base_url: String,
}

impl std::fmt::Debug for TwitterPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterPublisher")
            .field("api_url", &self.api_url)
            .field("access_token", &"****")
            .finish()
    }
}

impl TwitterPublisher {
    /// Creates a publisher posting to the tweet creation endpoint `api_url`.
    pub fn new(
        client: reqwest::Client,
        api_url: String,
        access_token: String,
        base_url: &str,
    ) -> Self {
        Self {
            client,
            api_url,
            access_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SocialPublisher for TwitterPublisher {
    fn platform(&self) -> &'static str {
        "twitter"
    }

    fn is_enabled(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    async fn publish(&self, job: &Job) -> Result<(), PublishError> {
        let text = truncate_post(&announcement(job, &self.base_url), TWEET_MAX_CHARS);
        debug!(job_id = %job.id, "Posting job to Twitter");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.access_token)
            .json(&CreateTweet { text })
            .send()
            .await?;

        check_response(response).await
    }
}
