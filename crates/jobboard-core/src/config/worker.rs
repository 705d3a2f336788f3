//! Background task configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Periodic maintenance loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the background loop is started.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds between two ticks of the loop.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_seconds: u64,
    /// Jobs older than this many days are deleted.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    /// Upper bound for a single outbound social platform call.
    #[serde(default = "default_publish_timeout")]
    pub publish_timeout_seconds: u64,
}

impl WorkerConfig {
    /// Tick period as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_seconds)
    }

    /// Outbound call timeout as a [`Duration`].
    pub fn publish_timeout(&self) -> Duration {
        Duration::from_secs(self.publish_timeout_seconds)
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            tick_interval_seconds: default_tick_interval(),
            retention_days: default_retention_days(),
            publish_timeout_seconds: default_publish_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_interval() -> u64 {
    60
}

fn default_retention_days() -> u32 {
    30
}

fn default_publish_timeout() -> u64 {
    10
}
