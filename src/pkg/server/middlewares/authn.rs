use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{
    pkg::{internal::auth, server::state::AppState},
    prelude::{Error, Result},
};

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty());
    let Some(token) = token else {
        tracing::warn!("token missing, authentication denied");
        return Err(Error::Unauthorized("Not authorized, no token"));
    };
    let user = auth::resolve_bearer(&state, token).await?;
    request.extensions_mut().insert(Arc::new(user));
    Ok(next.run(request).await)
}
