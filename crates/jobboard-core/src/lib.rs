//! # jobboard-core
//!
//! Core crate for the job board. Contains the configuration schema and
//! loader, and the unified error system.
//!
//! This crate has **no** internal dependencies on other job board crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
