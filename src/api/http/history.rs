// src/api/http/history.rs

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{HistoryResponse, SessionSummary};
use crate::auth::resolve_user_id;
use crate::state::AppState;

/// Session summaries for a user. A valid bearer token overrides the path id.
pub async fn history_handler(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<HistoryResponse>> {
    let user_id = resolve_user_id(app_state.verifier.as_ref(), &headers, &user_id).await;

    let sessions = app_state
        .chat_service
        .sessions()
        .sessions(&user_id)
        .await
        .map_err(|e| {
            error!("Failed to load sessions for {}: {:?}", user_id, e);
            ApiError::internal("Failed to fetch history")
        })?;

    info!("Returning {} sessions for {}", sessions.len(), user_id);
    Ok(Json(HistoryResponse {
        sessions: sessions.iter().map(SessionSummary::from).collect(),
    }))
}
