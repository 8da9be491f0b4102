use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

use crate::pkg::internal::adaptors::jobs::spec::EmploymentType;
use crate::pkg::internal::blobstore::BlobRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(ApplicationStatus::Pending),
            "accepted" => Some(ApplicationStatus::Accepted),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub years: i64,
    #[serde(default)]
    pub months: i64,
    #[serde(default)]
    pub days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_year: Option<i64>,
    #[serde(default)]
    pub end_year: Option<i64>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationEntry {
    pub application_id: String,
    pub job_id: String,
    pub applicant_id: String,
    pub name: String,
    pub email: String,
    pub experience: Json<Experience>,
    pub skills: Json<Vec<String>>,
    pub notes: String,
    pub education: Json<Vec<Education>>,
    pub resume: Option<Json<BlobRef>>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ApplicationWithJob {
    pub application_id: String,
    pub job_id: String,
    pub job_title: String,
    pub job_employment_type: EmploymentType,
    pub job_salary: f64,
    pub applicant_id: String,
    pub name: String,
    pub email: String,
    pub experience: Json<Experience>,
    pub skills: Json<Vec<String>>,
    pub notes: String,
    pub education: Json<Vec<Education>>,
    pub resume: Option<Json<BlobRef>>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
