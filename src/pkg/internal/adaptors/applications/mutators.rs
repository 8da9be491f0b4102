use chrono::Utc;
use sqlx::error::ErrorKind;
use sqlx::{types::Json, SqliteConnection};
use uuid::Uuid;

use crate::pkg::internal::adaptors::applications::spec::{
    ApplicationEntry, ApplicationStatus, Education, Experience,
};
use crate::pkg::internal::blobstore::BlobRef;
use crate::prelude::{Error, Result};

const APPLICATION_COLUMNS: &str =
    "application_id, job_id, applicant_id, name, email, experience, skills, notes, \
     education, resume, status, created_at, updated_at";

pub struct CreateApplicationData {
    pub job_id: String,
    pub applicant_id: String,
    pub name: String,
    pub email: String,
    pub experience: Experience,
    pub skills: Vec<String>,
    pub notes: String,
    pub education: Vec<Education>,
    pub resume: Option<BlobRef>,
}

pub struct ApplicationMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        ApplicationMutator { pool }
    }

    /// Single-statement insert; the UNIQUE(job_id, applicant_id) and foreign
    /// key constraints arbitrate concurrent duplicates and mid-delete races.
    pub async fn create(&mut self, data: CreateApplicationData) -> Result<ApplicationEntry> {
        let now = Utc::now();
        let result = sqlx::query_as::<_, ApplicationEntry>(&format!(
            r#"
            INSERT INTO applications (application_id, job_id, applicant_id, name, email, experience, skills, notes, education, resume, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'pending', ?, ?)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4().to_string())
        .bind(&data.job_id)
        .bind(&data.applicant_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(Json(&data.experience))
        .bind(Json(&data.skills))
        .bind(&data.notes)
        .bind(Json(&data.education))
        .bind(data.resume.map(Json))
        .bind(now)
        .bind(now)
        .fetch_one(&mut *self.pool)
        .await;
        match result {
            Ok(application) => Ok(application),
            Err(sqlx::Error::Database(db_err)) => match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    Err(Error::Conflict("You have already applied for this job"))
                }
                ErrorKind::ForeignKeyViolation => Err(Error::NotFound("Job not found")),
                _ => Err(sqlx::Error::Database(db_err).into()),
            },
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update_status(
        &mut self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Option<ApplicationEntry>> {
        let row = sqlx::query_as::<_, ApplicationEntry>(&format!(
            "UPDATE applications SET status = ?, updated_at = ? WHERE application_id = ? RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(status)
        .bind(Utc::now())
        .bind(application_id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_for_job(&mut self, job_id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM applications WHERE job_id = ?")
            .bind(job_id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
