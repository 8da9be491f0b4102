use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("{reason}")]
    Validation { field: String, reason: String },
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("token rejected: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::Unauthorized(_) | Error::Token(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        let body = match self {
            Error::Validation { field, reason } => ErrorBody {
                message: reason,
                field: Some(field),
            },
            Error::Token(_) => ErrorBody {
                message: "Token is not valid".into(),
                field: None,
            },
            _ if status.is_server_error() => ErrorBody {
                message: "internal server error".into(),
                field: None,
            },
            err => ErrorBody {
                message: err.to_string(),
                field: None,
            },
        };
        let mut response = Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errs: validator::ValidationErrors) -> Self {
        for (field, errors) in errs.field_errors() {
            if let Some(err) = errors.first() {
                let reason = err
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                return Error::Validation {
                    field: field.to_string(),
                    reason,
                };
            }
        }
        Error::validation("payload", "invalid payload")
    }
}
