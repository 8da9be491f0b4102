use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "full-time" => Some(EmploymentType::FullTime),
            "part-time" => Some(EmploymentType::PartTime),
            "contract" => Some(EmploymentType::Contract),
            "internship" => Some(EmploymentType::Internship),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub skills: Json<Vec<String>>,
    pub salary: f64,
    pub employment_type: EmploymentType,
    pub posted_by: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobWithPoster {
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub skills: Json<Vec<String>>,
    pub salary: f64,
    pub employment_type: EmploymentType,
    pub posted_by: String,
    pub poster_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
