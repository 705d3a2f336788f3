//! # jobboard-entity
//!
//! Domain entity models for the job board. Every struct in this crate
//! represents a database table row or a submitted form. Database entities
//! derive `sqlx::FromRow`.

pub mod job;
pub mod user;

pub use job::{FieldErrors, Job, NewJob};
pub use user::User;
