//! HTTP-level integration tests driving the real router over an
//! in-memory store.

mod helpers;

mod health_test;
mod jobs_test;
mod logging_test;
mod signed_link_test;
