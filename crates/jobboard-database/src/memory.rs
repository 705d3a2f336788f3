//! In-memory store used by tests and local runs without PostgreSQL.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_entity::job::model::non_empty;
use jobboard_entity::{Job, NewJob, User};

use crate::store::{JobStore, UserStore};

/// Timestamps are stored at microsecond precision, like PostgreSQL
/// `TIMESTAMPTZ`, so tokens signed over a stored value keep verifying
/// after a reload.
fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[derive(Debug, Default)]
struct Tables {
    jobs: HashMap<Uuid, Job>,
    users: HashMap<Uuid, User>,
}

/// Thread-safe in-memory implementation of [`JobStore`] and [`UserStore`].
///
/// Clones share the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully formed job, replacing any job with the same id.
    ///
    /// Lets callers seed rows with arbitrary publish timestamps.
    pub async fn insert_job(&self, mut job: Job) -> Job {
        job.published_at = job.published_at.trunc_subsecs(6);
        let mut tables = self.tables.write().await;
        tables.jobs.insert(job.id, job.clone());
        job
    }

    /// Number of stored jobs.
    pub async fn job_count(&self) -> usize {
        self.tables.read().await.jobs.len()
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        let tables = self.tables.read().await;
        let mut jobs: Vec<Job> = tables.jobs.values().cloned().collect();
        jobs.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(jobs)
    }

    async fn find_job(&self, id: Uuid) -> AppResult<Option<Job>> {
        Ok(self.tables.read().await.jobs.get(&id).cloned())
    }

    async fn list_due_for_social_post(&self) -> AppResult<Vec<Job>> {
        let tables = self.tables.read().await;
        let mut jobs: Vec<Job> = tables
            .jobs
            .values()
            .filter(|job| !job.published_to_socials)
            .filter(|job| {
                tables
                    .users
                    .values()
                    .any(|user| user.verified && user.email == job.email)
            })
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(jobs)
    }

    async fn create_job(&self, form: &NewJob) -> AppResult<Job> {
        let job = Job {
            id: Uuid::new_v4(),
            position: form.position.trim().to_string(),
            organization: form.organization.trim().to_string(),
            url: non_empty(&form.url),
            description: non_empty(&form.description),
            email: form.email.trim().to_string(),
            published_at: now_micros(),
            published_to_socials: false,
        };
        self.tables.write().await.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn save_job(&self, job: &Job) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .jobs
            .get_mut(&job.id)
            .ok_or_else(|| AppError::not_found(format!("Job {} not found", job.id)))?;
        stored.position = job.position.clone();
        stored.organization = job.organization.clone();
        stored.url = job.url.clone();
        stored.description = job.description.clone();
        stored.published_to_socials = job.published_to_socials;
        Ok(())
    }

    async fn set_published_to_socials(&self, id: Uuid, value: bool) -> AppResult<()> {
        if let Some(job) = self.tables.write().await.jobs.get_mut(&id) {
            job.published_to_socials = value;
        }
        Ok(())
    }

    async fn delete_older_than(&self, max_age: Duration) -> AppResult<u64> {
        let cutoff = Utc::now() - max_age;
        let mut tables = self.tables.write().await;
        let before = tables.jobs.len();
        tables.jobs.retain(|_, job| job.published_at >= cutoff);
        Ok((before - tables.jobs.len()) as u64)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn get_or_create_user(&self, email: &str) -> AppResult<User> {
        // Lookup and insert under one write lock keeps emails unique.
        let mut tables = self.tables.write().await;
        if let Some(user) = tables.users.values().find(|u| u.email == email) {
            return Ok(user.clone());
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            verified: false,
            created_at: now_micros(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn set_user_verified(&self, id: Uuid, verified: bool) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.verified = verified;
        Ok(())
    }
}
