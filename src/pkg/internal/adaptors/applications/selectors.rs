use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::applications::spec::{ApplicationEntry, ApplicationWithJob};
use crate::prelude::Result;

const APPLICATION_COLUMNS: &str =
    "application_id, job_id, applicant_id, name, email, experience, skills, notes, \
     education, resume, status, created_at, updated_at";

const JOINED_COLUMNS: &str =
    "a.application_id, a.job_id, j.title AS job_title, j.employment_type AS job_employment_type, \
     j.salary AS job_salary, a.applicant_id, a.name, a.email, a.experience, a.skills, a.notes, \
     a.education, a.resume, a.status, a.created_at, a.updated_at";

pub struct ApplicationSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        ApplicationSelector { pool }
    }

    pub async fn get_by_id(&mut self, application_id: &str) -> Result<Option<ApplicationEntry>> {
        let row = sqlx::query_as::<_, ApplicationEntry>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE application_id = ?"
        ))
        .bind(application_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_for_pair(
        &mut self,
        job_id: &str,
        applicant_id: &str,
    ) -> Result<Option<ApplicationEntry>> {
        let row = sqlx::query_as::<_, ApplicationEntry>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE job_id = ? AND applicant_id = ?"
        ))
        .bind(job_id)
        .bind(applicant_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn for_applicant(&mut self, applicant_id: &str) -> Result<Vec<ApplicationWithJob>> {
        let rows = sqlx::query_as::<_, ApplicationWithJob>(&format!(
            "SELECT {JOINED_COLUMNS} FROM applications a
             JOIN jobs j ON j.job_id = a.job_id
             WHERE a.applicant_id = ?
             ORDER BY a.created_at DESC"
        ))
        .bind(applicant_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn for_job(&mut self, job_id: &str) -> Result<Vec<ApplicationWithJob>> {
        let rows = sqlx::query_as::<_, ApplicationWithJob>(&format!(
            "SELECT {JOINED_COLUMNS} FROM applications a
             JOIN jobs j ON j.job_id = a.job_id
             WHERE a.job_id = ?
             ORDER BY a.created_at DESC"
        ))
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn all(&mut self) -> Result<Vec<ApplicationWithJob>> {
        let rows = sqlx::query_as::<_, ApplicationWithJob>(&format!(
            "SELECT {JOINED_COLUMNS} FROM applications a
             JOIN jobs j ON j.job_id = a.job_id
             ORDER BY a.created_at DESC"
        ))
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
