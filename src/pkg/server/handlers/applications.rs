use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::spec::{ApplicationEntry, ApplicationWithJob},
                users::spec::UserEntry,
            },
            workflow::{self, SubmissionFields, Upload},
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

#[derive(Debug, Deserialize)]
pub struct StatusInput {
    pub status: String,
}

pub async fn submit(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Path(job_id): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApplicationEntry>)> {
    let mut fields = SubmissionFields::default();
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::validation("payload", e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "experience" => fields.experience = Some(read_text(field, "experience").await?),
            "skills" => fields.skills = Some(read_text(field, "skills").await?),
            "notes" => fields.notes = Some(read_text(field, "notes").await?),
            "education" => fields.education = Some(read_text(field, "education").await?),
            "resume" => {
                let original_name = field.file_name().unwrap_or("resume").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| Error::validation("resume", "File too large. Maximum size is 5MB"))?;
                tracing::debug!("received resume {} ({} bytes)", &original_name, bytes.len());
                upload = Some(Upload {
                    original_name,
                    bytes,
                });
            }
            other => {
                tracing::debug!("ignoring unknown multipart field {}", other);
            }
        }
    }
    let record = workflow::submit(&state, &user, &job_id, fields, upload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| Error::validation(name, e.to_string()))
}

pub async fn set_status(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Path(application_id): Path<String>,
    Json(input): Json<StatusInput>,
) -> Result<Json<ApplicationEntry>> {
    let record = workflow::set_status(&state, &user, &application_id, &input.status).await?;
    Ok(Json(record))
}

pub async fn list_mine(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
) -> Result<Json<Vec<ApplicationWithJob>>> {
    Ok(Json(workflow::list_mine(&state, &user).await?))
}

pub async fn list_for_job(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<ApplicationWithJob>>> {
    Ok(Json(workflow::list_for_job(&state, &user, &job_id).await?))
}

pub async fn list_all(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
) -> Result<Json<Vec<ApplicationWithJob>>> {
    Ok(Json(workflow::list_all(&state, &user).await?))
}

pub async fn resume(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Path(application_id): Path<String>,
) -> Result<Response> {
    let (blob, bytes) = workflow::resume_attachment(&state, &user, &application_id).await?;
    let headers = [
        (CONTENT_TYPE, blob.mime_type),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", blob.original_name),
        ),
    ];
    Ok((headers, bytes).into_response())
}
