//! Background maintenance for the job board.
//!
//! This crate provides:
//! - A `Sweep` trait for idempotent maintenance passes
//! - The retention sweep deleting expired job postings
//! - The social-publish sweep announcing new jobs of verified posters
//! - A task runner that executes the sweeps on a fixed interval until cancelled

pub mod jobs;
pub mod runner;
pub mod sweep;

pub use jobs::{RetentionSweep, SocialPublishSweep};
pub use runner::TaskRunner;
pub use sweep::{Sweep, SweepError};
