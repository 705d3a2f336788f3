//! Token derivation and verification.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use jobboard_core::config::SigningConfig;

use super::signable::Signable;

/// Derives and checks capability tokens with the server secret.
#[derive(Clone)]
pub struct LinkSigner {
    secret: Vec<u8>,
}

impl std::fmt::Debug for LinkSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkSigner")
            .field("secret", &"****")
            .finish()
    }
}

impl LinkSigner {
    /// Creates a signer over a raw secret.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Creates a signer from the signing configuration.
    pub fn from_config(config: &SigningConfig) -> Self {
        Self::new(config.app_secret.as_bytes())
    }

    /// Computes the token for a resource.
    ///
    /// Every field is length-prefixed, so no field value can be shifted
    /// into its neighbour to forge a collision.
    pub fn sign<R: Signable + ?Sized>(&self, resource: &R) -> String {
        let fields = resource.signing_fields();
        let mut hasher = Sha256::new();
        update_field(&mut hasher, R::KIND.as_bytes());
        update_field(&mut hasher, fields.id.as_bytes());
        update_field(&mut hasher, fields.email.as_bytes());
        update_field(&mut hasher, &fields.timestamp.timestamp_micros().to_be_bytes());
        update_field(&mut hasher, &self.secret);
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }

    /// Checks a supplied token against the one derived from `resource`.
    pub fn verify<R: Signable + ?Sized>(&self, resource: &R, token: &str) -> bool {
        let expected = self.sign(resource);
        expected.as_bytes().ct_eq(token.as_bytes()).into()
    }
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_be_bytes());
    hasher.update(bytes);
}
