//! Signed-capability tokens and links.

pub mod link;
pub mod signable;
pub mod token;

pub use signable::{Signable, SigningFields};
pub use link::LinkBuilder;
pub use token::LinkSigner;
