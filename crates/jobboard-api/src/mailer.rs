//! Delivery of signed links to posters.

use async_trait::async_trait;
use tracing::info;

use jobboard_core::result::AppResult;
use jobboard_entity::User;

/// Sends signed links to the owner of an email address.
#[async_trait]
pub trait LinkMailer: Send + Sync + std::fmt::Debug {
    /// Deliver the verification link of `user`.
    async fn send_verification(&self, user: &User, verify_url: &str) -> AppResult<()>;
}

/// Mailer that only records deliveries in the log.
///
/// The link itself is not logged; it grants access to the account.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl LinkMailer for LogMailer {
    async fn send_verification(&self, user: &User, _verify_url: &str) -> AppResult<()> {
        info!(user_id = %user.id, "Verification link issued");
        Ok(())
    }
}
