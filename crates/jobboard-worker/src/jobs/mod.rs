//! Built-in sweep implementations.

pub mod retention;
pub mod social;

pub use retention::RetentionSweep;
pub use social::SocialPublishSweep;
