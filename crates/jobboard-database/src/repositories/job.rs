//! Job repository implementation.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_entity::job::model::non_empty;
use jobboard_entity::{Job, NewJob};

use crate::store::JobStore;

/// Repository for job postings.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for JobRepository {
    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY published_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    async fn find_job(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job by id", e))
    }

    async fn list_due_for_social_post(&self) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            r#"SELECT j.*
               FROM jobs j
               INNER JOIN users u ON u.email = j.email
               WHERE u.verified = TRUE
                 AND j.published_to_socials = FALSE
               ORDER BY j.published_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list jobs due for social posting",
                e,
            )
        })
    }

    async fn create_job(&self, form: &NewJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            r#"INSERT INTO jobs (position, organization, url, description, email)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(form.position.trim())
        .bind(form.organization.trim())
        .bind(non_empty(&form.url))
        .bind(non_empty(&form.description))
        .bind(form.email.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    async fn save_job(&self, job: &Job) -> AppResult<()> {
        let result = sqlx::query(
            r#"UPDATE jobs
               SET position = $2, organization = $3, url = $4, description = $5,
                   published_to_socials = $6
               WHERE id = $1"#,
        )
        .bind(job.id)
        .bind(&job.position)
        .bind(&job.organization)
        .bind(&job.url)
        .bind(&job.description)
        .bind(job.published_to_socials)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save job", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Job {} not found", job.id)));
        }
        Ok(())
    }

    async fn set_published_to_socials(&self, id: Uuid, value: bool) -> AppResult<()> {
        sqlx::query("UPDATE jobs SET published_to_socials = $2 WHERE id = $1")
            .bind(id)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark job published", e)
            })?;
        Ok(())
    }

    async fn delete_older_than(&self, max_age: Duration) -> AppResult<u64> {
        let cutoff = Utc::now() - max_age;
        let result = sqlx::query("DELETE FROM jobs WHERE published_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete old jobs", e)
            })?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))?;
        Ok(())
    }
}
