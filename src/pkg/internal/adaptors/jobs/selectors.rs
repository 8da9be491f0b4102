use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobWithPoster};
use crate::prelude::Result;

pub struct JobSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, job_id: &str) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT job_id, title, description, requirements, skills, salary, employment_type, posted_by, is_active, created_at, updated_at
             FROM jobs WHERE job_id = ?",
        )
        .bind(job_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_active_by_id(&mut self, job_id: &str) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT job_id, title, description, requirements, skills, salary, employment_type, posted_by, is_active, created_at, updated_at
             FROM jobs WHERE job_id = ? AND is_active = 1",
        )
        .bind(job_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_active(&mut self) -> Result<Vec<JobWithPoster>> {
        let rows = sqlx::query_as::<_, JobWithPoster>(
            "SELECT j.job_id, j.title, j.description, j.requirements, j.skills, j.salary, j.employment_type, j.posted_by, u.name AS poster_name, j.is_active, j.created_at, j.updated_at
             FROM jobs j
             JOIN users u ON u.user_id = j.posted_by
             WHERE j.is_active = 1
             ORDER BY j.created_at DESC",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
