use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, patch, post, put};
use axum::Router;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

// Body limit above the 5 MiB resume ceiling so the workflow, not the
// transport, rejects oversize files with a named error.
const BODY_LIMIT_BYTES: usize = 8 * 1024 * 1024;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    Ok(build_with_state(state))
}

pub fn build_with_state(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/jobs", post(handlers::jobs::create))
        .route(
            "/api/jobs/:job_id",
            put(handlers::jobs::update).delete(handlers::jobs::remove),
        )
        .route(
            "/api/jobs/:job_id/applications",
            get(handlers::applications::list_for_job),
        )
        .route("/api/applications", get(handlers::applications::list_all))
        .route(
            "/api/applications/my-applications",
            get(handlers::applications::list_mine),
        )
        .route("/api/applications/:id", post(handlers::applications::submit))
        .route(
            "/api/applications/:id/resume",
            get(handlers::applications::resume),
        )
        .route(
            "/api/applications/:id/status",
            patch(handlers::applications::set_status),
        )
        .route("/api/skills", post(handlers::skills::add))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/jobs", get(handlers::jobs::list))
        .route("/api/jobs/:job_id", get(handlers::jobs::get_by_id))
        .route("/api/skills", get(handlers::skills::list))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
