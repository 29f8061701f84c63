// src/api/types.rs
// Request/response bodies for the HTTP surface

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::SessionRecord;

fn default_user_id() -> String {
    "anonymous".to_string()
}

fn default_gender() -> String {
    "female".to_string()
}

fn default_persona() -> String {
    "calm".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "default_persona")]
    pub persona: String,
    #[serde(default)]
    pub genz: bool,
    #[serde(default)]
    pub journaling: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub style: String,
    pub messages_count: usize,
    pub preview: String,
}

impl From<&SessionRecord> for SessionSummary {
    fn from(session: &SessionRecord) -> Self {
        Self {
            id: session.id.clone(),
            started_at: session.started_at,
            last_updated: session.last_updated,
            style: session.style.clone(),
            messages_count: session.messages.len(),
            preview: session.preview().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub sessions: Vec<SessionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_configured: bool,
}
