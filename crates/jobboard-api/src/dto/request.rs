//! Request DTOs.

use serde::Deserialize;

/// Query string of a signed link.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenQuery {
    /// Capability token; absent tokens never match.
    pub token: Option<String>,
}
