use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                jobs::{
                    mutators::JobMutator,
                    selectors::JobSelector,
                    spec::{EmploymentType, JobEntry, JobWithPoster},
                },
                users::spec::UserEntry,
            },
            workflow,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Requirements are required"))]
    pub requirements: String,
    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skills: Vec<String>,
    #[validate(range(min = 0.0, message = "Salary must be non-negative"))]
    pub salary: f64,
    pub employment_type: EmploymentType,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchJobInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Requirements are required"))]
    pub requirements: Option<String>,
    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skills: Option<Vec<String>>,
    #[validate(range(min = 0.0, message = "Salary must be non-negative"))]
    pub salary: Option<f64>,
    pub employment_type: Option<EmploymentType>,
    pub is_active: Option<bool>,
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Json(input): Json<CreateJobInput>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    if !user.role.is_super_admin() {
        return Err(Error::Forbidden("Super admin access required"));
    }
    input.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    let job = JobMutator::new(&mut conn).create(input, &user.user_id).await?;
    tracing::info!("job {} created by {}", &job.job_id, &user.username);
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Path(job_id): Path<String>,
    Json(input): Json<PatchJobInput>,
) -> Result<Json<JobEntry>> {
    if !user.role.is_super_admin() {
        return Err(Error::Forbidden("Super admin access required"));
    }
    input.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    let job = JobMutator::new(&mut conn)
        .update(&job_id, input)
        .await?
        .ok_or(Error::NotFound("Job not found"))?;
    Ok(Json(job))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Path(job_id): Path<String>,
) -> Result<Json<Value>> {
    let removed = workflow::delete_job(&state, &user, &job_id).await?;
    Ok(Json(json!({
        "message": "Job removed",
        "applications_removed": removed,
    })))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobWithPoster>>> {
    let mut conn = state.db_pool.acquire().await?;
    let jobs = JobSelector::new(&mut conn).get_active().await?;
    Ok(Json(jobs))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    let job = JobSelector::new(&mut conn)
        .get_by_id(&job_id)
        .await?
        .ok_or(Error::NotFound("Job not found"))?;
    Ok(Json(job))
}
