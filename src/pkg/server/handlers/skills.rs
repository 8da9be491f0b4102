use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    pkg::{
        internal::{adaptors::users::spec::UserEntry, skills::TaxonomySnapshot},
        server::state::AppState,
    },
    prelude::{Error, Result},
};

#[derive(Debug, Deserialize, Validate)]
pub struct AddSkillInput {
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Skill is required"))]
    pub skill: String,
}

pub async fn list(State(state): State<AppState>) -> Json<TaxonomySnapshot> {
    Json(state.taxonomy.snapshot())
}

pub async fn add(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<UserEntry>>,
    Json(input): Json<AddSkillInput>,
) -> Result<(StatusCode, Json<Value>)> {
    if !user.role.is_admin() {
        return Err(Error::Forbidden("Admin access required"));
    }
    input.validate()?;
    state.taxonomy.append(&input.category, &input.skill)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Skill added successfully"})),
    ))
}
