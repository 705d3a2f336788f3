//! Store traits consumed by the HTTP layer and the background tasks.

use async_trait::async_trait;
use chrono::Duration;
use uuid::Uuid;

use jobboard_core::result::AppResult;
use jobboard_entity::{Job, NewJob, User};

/// Persistence for job postings.
#[async_trait]
pub trait JobStore: Send + Sync + std::fmt::Debug {
    /// All jobs, newest publish timestamp first.
    async fn list_jobs(&self) -> AppResult<Vec<Job>>;

    /// A single job by id.
    async fn find_job(&self, id: Uuid) -> AppResult<Option<Job>>;

    /// Jobs not yet handed to the social publishers whose poster's email
    /// belongs to a verified user. Jobs without a matching verified user
    /// are never returned.
    async fn list_due_for_social_post(&self) -> AppResult<Vec<Job>>;

    /// Insert a validated submission. The store assigns the id and the
    /// publish timestamp; `published_to_socials` starts out false.
    async fn create_job(&self, form: &NewJob) -> AppResult<Job>;

    /// Persist the mutable fields of an existing job.
    async fn save_job(&self, job: &Job) -> AppResult<()>;

    /// Flip the social-publishing flag of a job.
    async fn set_published_to_socials(&self, id: Uuid, value: bool) -> AppResult<()>;

    /// Hard-delete every job published more than `max_age` ago.
    /// Returns the number of deleted rows.
    async fn delete_older_than(&self, max_age: Duration) -> AppResult<u64>;

    /// Cheap round trip proving the backing store answers.
    async fn ping(&self) -> AppResult<()>;
}

/// Persistence for email identities.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// A single user by id.
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>>;

    /// A single user by email.
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Atomic find-or-insert keyed on email. Concurrent calls for the
    /// same email return the same row.
    async fn get_or_create_user(&self, email: &str) -> AppResult<User>;

    /// Set the verification flag of a user.
    async fn set_user_verified(&self, id: Uuid, verified: bool) -> AppResult<()>;
}
