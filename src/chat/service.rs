// src/chat/service.rs
// Reply generation: crisis screen, prompt build, model call, memory updates

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::chat::locks::UserLocks;
use crate::llm::{LlmError, LlmProvider};
use crate::memory::{ConversationEntry, ConversationStore, SessionStore};
use crate::prompt::{build_prompt, build_system_instruction};
use crate::safety::{is_crisis, CRISIS_RESPONSE};

pub const NOT_CONFIGURED_REPLY: &str = "I'm here to listen. Please share what's on your mind.";
pub const MODEL_FAILURE_REPLY: &str = "I'm sorry, I'm having trouble responding right now. Please try again in a moment.";
pub const EMPTY_REPLY: &str = "I'm here for you. Could you tell me a little more about how you're feeling?";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Memory store failed: {0}")]
    Store(#[from] anyhow::Error),
}

/// What happened on a chat turn. Every variant renders to reply text; only
/// `Generated`, `Empty` and `Failed` are written to memory.
#[derive(Debug)]
pub enum ReplyOutcome {
    /// Crisis keyword matched; hotline text, nothing stored.
    Crisis,
    /// No model credential configured; fixed text, nothing stored.
    NotConfigured,
    Generated(String),
    /// The model answered without any text.
    Empty,
    /// The model call failed; the apology text was stored in its place.
    Failed(LlmError),
}

impl ReplyOutcome {
    pub fn text(&self) -> &str {
        match self {
            ReplyOutcome::Crisis => CRISIS_RESPONSE,
            ReplyOutcome::NotConfigured => NOT_CONFIGURED_REPLY,
            ReplyOutcome::Generated(reply) => reply.as_str(),
            ReplyOutcome::Empty => EMPTY_REPLY,
            ReplyOutcome::Failed(_) => MODEL_FAILURE_REPLY,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ReplyOutcome::Crisis => "crisis",
            ReplyOutcome::NotConfigured => "not_configured",
            ReplyOutcome::Generated(_) => "generated",
            ReplyOutcome::Empty => "empty",
            ReplyOutcome::Failed(_) => "failed",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ReplyOutcome::Generated(reply) => reply,
            other => other.text().to_string(),
        }
    }
}

/// Client preferences that shape a single turn.
#[derive(Debug, Clone)]
pub struct ReplyRequest<'a> {
    pub user_id: &'a str,
    pub message: &'a str,
    pub gender: &'a str,
    pub persona: &'a str,
    pub journaling: bool,
}

pub struct ChatService {
    provider: Option<Arc<dyn LlmProvider>>,
    conversations: Arc<dyn ConversationStore>,
    sessions: Arc<dyn SessionStore>,
    history_window: usize,
    locks: UserLocks,
}

impl ChatService {
    pub fn new(
        provider: Option<Arc<dyn LlmProvider>>,
        conversations: Arc<dyn ConversationStore>,
        sessions: Arc<dyn SessionStore>,
        history_window: usize,
    ) -> Self {
        Self {
            provider,
            conversations,
            sessions,
            history_window,
            locks: UserLocks::new(),
        }
    }

    pub fn model_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    pub async fn generate_reply(&self, req: ReplyRequest<'_>) -> Result<ReplyOutcome, ChatError> {
        if is_crisis(req.message) {
            warn!("Crisis keyword detected for user {}, returning hotline reply", req.user_id);
            return Ok(ReplyOutcome::Crisis);
        }

        let _turn = self.locks.acquire(req.user_id).await;
        self.run_turn(&req).await
    }

    async fn run_turn(&self, req: &ReplyRequest<'_>) -> Result<ReplyOutcome, ChatError> {
        let history = self.conversations.get(req.user_id).await?;
        let system = build_system_instruction(req.gender, req.persona, req.journaling);
        let prompt = build_prompt(&system, &history, req.message);

        let Some(provider) = self.provider.as_ref() else {
            info!("No model configured, sending fallback reply to {}", req.user_id);
            return Ok(ReplyOutcome::NotConfigured);
        };

        let outcome = match provider.complete(&prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => ReplyOutcome::Generated(text.trim().to_string()),
            Ok(_) => {
                warn!("{} returned no text for user {}", provider.name(), req.user_id);
                ReplyOutcome::Empty
            }
            Err(e) => {
                warn!("{} call failed for user {}: {}", provider.name(), req.user_id, e);
                ReplyOutcome::Failed(e)
            }
        };
        let reply = outcome.text();

        self.conversations
            .append(
                req.user_id,
                vec![
                    ConversationEntry::user(req.message),
                    ConversationEntry::therapist(reply),
                ],
            )
            .await?;
        self.conversations.evict(req.user_id, self.history_window).await?;

        self.sessions
            .record_exchange(req.user_id, req.persona, req.message, reply, Utc::now())
            .await?;

        Ok(outcome)
    }
}
