// src/api/http/health.rs

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::types::HealthResponse;
use crate::state::AppState;

pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_configured: app_state.chat_service.model_configured(),
    })
}
