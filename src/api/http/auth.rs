// src/api/http/auth.rs

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;
use tracing::warn;

use crate::api::error::ApiResult;
use crate::api::types::MeResponse;
use crate::auth::{bearer_token, AuthError};
use crate::state::AppState;

/// Identity behind the bearer token. Unlike the other routes, failure here is an error.
pub async fn me_handler(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<MeResponse>> {
    let token = bearer_token(&headers).ok_or(AuthError::MissingToken)?;

    let claims = app_state.verifier.verify(token).await.map_err(|e| {
        warn!("Rejected token on /auth/me: {}", e);
        e
    })?;

    Ok(Json(MeResponse {
        user_id: claims.sub,
        email: claims.email,
        name: claims.name,
    }))
}
