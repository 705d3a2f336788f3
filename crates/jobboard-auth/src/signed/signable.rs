//! Resources that can be referenced by a signed link.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use jobboard_entity::{Job, User};

/// The fields a token is derived from.
#[derive(Debug, Clone, Copy)]
pub struct SigningFields<'a> {
    /// Stable resource identifier.
    pub id: Uuid,
    /// Email bound to the resource.
    pub email: &'a str,
    /// Timestamp bound to the resource. Changing it revokes every link.
    pub timestamp: DateTime<Utc>,
}

/// A resource kind that can be addressed by a signed link.
pub trait Signable {
    /// Resource kind tag. Also the first path segment of the resource's routes.
    const KIND: &'static str;

    /// Stable identifier used in links.
    fn id(&self) -> Uuid;

    /// The fields covered by the signature.
    fn signing_fields(&self) -> SigningFields<'_>;
}

impl Signable for Job {
    const KIND: &'static str = "jobs";

    fn id(&self) -> Uuid {
        self.id
    }

    fn signing_fields(&self) -> SigningFields<'_> {
        SigningFields {
            id: self.id,
            email: &self.email,
            timestamp: self.published_at,
        }
    }
}

impl Signable for User {
    const KIND: &'static str = "users";

    fn id(&self) -> Uuid {
        self.id
    }

    fn signing_fields(&self) -> SigningFields<'_> {
        SigningFields {
            id: self.id,
            email: &self.email,
            timestamp: self.created_at,
        }
    }
}
