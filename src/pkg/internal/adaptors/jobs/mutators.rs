use chrono::Utc;
use sqlx::{types::Json, SqliteConnection};
use uuid::Uuid;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::handlers::jobs::{CreateJobInput, PatchJobInput};
use crate::prelude::Result;

const JOB_COLUMNS: &str = "job_id, title, description, requirements, skills, salary, \
                           employment_type, posted_by, is_active, created_at, updated_at";

pub struct JobMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: CreateJobInput, posted_by: &str) -> Result<JobEntry> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, JobEntry>(&format!(
            r#"
            INSERT INTO jobs (job_id, title, description, requirements, skills, salary, employment_type, posted_by, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4().to_string())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(Json(&job.skills))
        .bind(job.salary)
        .bind(&job.employment_type)
        .bind(posted_by)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, job_id: &str, job: PatchJobInput) -> Result<Option<JobEntry>> {
        let mut query = String::from("UPDATE jobs SET updated_at = ?");

        if job.title.is_some() {
            query.push_str(", title = ?");
        }
        if job.description.is_some() {
            query.push_str(", description = ?");
        }
        if job.requirements.is_some() {
            query.push_str(", requirements = ?");
        }
        if job.skills.is_some() {
            query.push_str(", skills = ?");
        }
        if job.salary.is_some() {
            query.push_str(", salary = ?");
        }
        if job.employment_type.is_some() {
            query.push_str(", employment_type = ?");
        }
        if job.is_active.is_some() {
            query.push_str(", is_active = ?");
        }

        query.push_str(&format!(" WHERE job_id = ? RETURNING {JOB_COLUMNS}"));

        let mut q = sqlx::query_as::<_, JobEntry>(&query).bind(Utc::now());

        if let Some(title) = job.title {
            q = q.bind(title);
        }
        if let Some(description) = job.description {
            q = q.bind(description);
        }
        if let Some(requirements) = job.requirements {
            q = q.bind(requirements);
        }
        if let Some(skills) = job.skills {
            q = q.bind(Json(skills));
        }
        if let Some(salary) = job.salary {
            q = q.bind(salary);
        }
        if let Some(employment_type) = job.employment_type {
            q = q.bind(employment_type);
        }
        if let Some(is_active) = job.is_active {
            q = q.bind(is_active);
        }
        let row = q.bind(job_id).fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }

    pub async fn delete(&mut self, job_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE job_id = ?")
            .bind(job_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
