//! # jobboard-database
//!
//! Resource store boundary for the job board: the [`JobStore`] and
//! [`UserStore`] traits the rest of the workspace consumes, the
//! PostgreSQL repositories implementing them, an in-memory store used by
//! tests, and pool setup that applies migrations before handing out
//! connections.

pub mod memory;
pub mod pool;
pub mod repositories;
pub mod store;

pub use memory::MemoryStore;
pub use store::{JobStore, UserStore};
