//! PostgreSQL implementations of the store traits.

pub mod job;
pub mod user;

pub use job::JobRepository;
pub use user::UserRepository;
