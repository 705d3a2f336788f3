//! # jobboard-auth
//!
//! Capability links for the job board. A signed link grants the holder
//! the right to act on one resource without any account or session: the
//! token is a keyed digest over the resource's identity fields and a
//! server secret, so it can be recomputed and compared on every request.
//!
//! ## Modules
//!
//! - `signed`: the `Signable` capability, token derivation and verification,
//!   and signed URL construction

pub mod signed;

pub use signed::{LinkBuilder, LinkSigner, Signable, SigningFields};
