// src/api/http/chat.rs

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{ChatRequest, ChatResponse};
use crate::auth::resolve_user_id;
use crate::chat::ReplyRequest;
use crate::slang::genz_transform;
use crate::state::AppState;

pub async fn chat_handler(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let user_id = resolve_user_id(app_state.verifier.as_ref(), &headers, &request.user_id).await;

    if app_state.config.strict_credential && !app_state.chat_service.model_configured() {
        return Err(ApiError::service_unavailable("Language model is not configured"));
    }

    let outcome = app_state
        .chat_service
        .generate_reply(ReplyRequest {
            user_id: &user_id,
            message: &request.message,
            gender: &request.gender,
            persona: &request.persona,
            journaling: request.journaling,
        })
        .await?;

    info!("Chat turn for {}: {} (genz: {})", user_id, outcome.kind(), request.genz);

    let reply = outcome.into_text();
    let reply = if request.genz { genz_transform(&reply) } else { reply };

    Ok(Json(ChatResponse { reply }))
}
