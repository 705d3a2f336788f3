//! # jobboard-social
//!
//! Announces new job postings on social platforms. Each platform is a
//! [`SocialPublisher`]; a platform whose credential is not configured is
//! simply not built.

pub mod error;
pub mod message;
pub mod publisher;
pub mod slack;
pub mod twitter;

pub use error::PublishError;
pub use publisher::{SocialPublisher, build_publishers};
pub use slack::SlackPublisher;
pub use twitter::TwitterPublisher;
