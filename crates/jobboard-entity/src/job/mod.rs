//! Job posting entities.

pub mod form;
pub mod model;
pub mod validation;

pub use form::NewJob;
pub use model::Job;
pub use validation::FieldErrors;
