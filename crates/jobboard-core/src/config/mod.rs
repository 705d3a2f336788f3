//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod database;
pub mod logging;
pub mod signing;
pub mod social;
pub mod worker;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::signing::SigningConfig;
pub use self::social::SocialConfig;
pub use self::worker::WorkerConfig;

use crate::error::AppError;

/// Conventional single-name environment variables and the config keys they
/// override. These win over every other source.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("APP_SECRET", "signing.app_secret"),
    ("APP_URL", "server.base_url"),
    ("APP_ENV", "server.environment"),
    ("PORT", "server.port"),
    ("SLACK_HOOK", "social.slack_webhook_url"),
    ("TWITTER_ACCESS_TOKEN", "social.twitter_access_token"),
];

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (default.toml + environment overlay + env variables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Signed-link settings.
    pub signing: SigningConfig,
    /// Background task settings.
    #[serde(default)]
    pub worker: WorkerConfig,
    /// Social platform credentials.
    #[serde(default)]
    pub social: SocialConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml`, variables prefixed
    /// with `JOBBOARD__` and finally the conventional single variables such
    /// as `DATABASE_URL` and `APP_SECRET`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("JOBBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    fn from_config(config: config::Config) -> Result<Self, AppError> {
        let mut parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.server.base_url = parsed.server.base_url.trim_end_matches('/').to_string();
        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject configurations the server cannot safely run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration("database.url must be set"));
        }
        if self.signing.app_secret.is_empty() {
            return Err(AppError::configuration("signing.app_secret must be set"));
        }
        if self.worker.tick_interval_seconds == 0 {
            return Err(AppError::configuration(
                "worker.tick_interval_seconds must be greater than zero",
            ));
        }
        if self.worker.publish_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "worker.publish_timeout_seconds must be greater than zero",
            ));
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "server.request_timeout_seconds must be greater than zero",
            ));
        }
        Ok(())
    }
}
