//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public base URL used when building signed links and social posts.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment mode: `"debug"` or `"release"`.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl ServerConfig {
    /// Whether the server runs in debug mode.
    pub fn is_debug(&self) -> bool {
        self.environment.eq_ignore_ascii_case("debug")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: default_base_url(),
            environment: default_environment(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_environment() -> String {
    "release".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
