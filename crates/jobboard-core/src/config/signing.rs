//! Signed-link configuration.

use serde::{Deserialize, Serialize};

/// Shared secret used to derive capability tokens.
#[derive(Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Server-side secret mixed into every token. Must not be empty.
    pub app_secret: String,
}

impl std::fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("app_secret", &"****")
            .finish()
    }
}
