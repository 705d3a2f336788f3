//! Signed URL construction.

use super::signable::Signable;
use super::token::LinkSigner;

/// Builds absolute signed links rooted at the public base URL.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    signer: LinkSigner,
}

impl LinkBuilder {
    /// Creates a builder. A trailing slash on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>, signer: LinkSigner) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, signer }
    }

    /// The signer used for tokens.
    pub fn signer(&self) -> &LinkSigner {
        &self.signer
    }

    /// Unsigned public URL of a resource: `{base}/{kind}/{id}`.
    pub fn resource_url<R: Signable + ?Sized>(&self, resource: &R) -> String {
        format!("{}/{}/{}", self.base_url, R::KIND, resource.id())
    }

    /// Signed link to a resource, optionally to a sub-action such as
    /// `edit` or `verify`: `{base}/{kind}/{id}[/{action}]?token={token}`.
    pub fn signed_url<R: Signable + ?Sized>(&self, resource: &R, action: Option<&str>) -> String {
        let token = self.signer.sign(resource);
        let mut url = self.resource_url(resource);
        if let Some(action) = action {
            url.push('/');
            url.push_str(action);
        }
        url.push_str("?token=");
        url.push_str(&urlencoding::encode(&token));
        url
    }
}
