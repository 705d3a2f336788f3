//! Social platform configuration.
//!
//! An empty credential disables the corresponding platform.

use serde::{Deserialize, Serialize};

/// Credentials for the platforms new jobs are cross-posted to.
#[derive(Clone, Serialize, Deserialize)]
pub struct SocialConfig {
    /// Slack incoming webhook URL.
    #[serde(default)]
    pub slack_webhook_url: String,
    /// Twitter API access token (OAuth 2.0 user context).
    #[serde(default)]
    pub twitter_access_token: String,
    /// Endpoint used to create tweets.
    #[serde(default = "default_twitter_api_url")]
    pub twitter_api_url: String,
}

impl SocialConfig {
    /// Whether posting to Slack is configured.
    pub fn slack_enabled(&self) -> bool {
        !self.slack_webhook_url.trim().is_empty()
    }

    /// Whether posting to Twitter is configured.
    pub fn twitter_enabled(&self) -> bool {
        !self.twitter_access_token.trim().is_empty()
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            slack_webhook_url: String::new(),
            twitter_access_token: String::new(),
            twitter_api_url: default_twitter_api_url(),
        }
    }
}

impl std::fmt::Debug for SocialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialConfig")
            .field("slack_enabled", &self.slack_enabled())
            .field("twitter_enabled", &self.twitter_enabled())
            .field("twitter_api_url", &self.twitter_api_url)
            .finish()
    }
}

fn default_twitter_api_url() -> String {
    "https://api.twitter.com/2/tweets".to_string()
}
