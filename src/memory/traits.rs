// src/memory/traits.rs

//! Storage seams for the conversation window and the session log.
//! The reply generator only talks to these traits, never to a concrete map.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::memory::types::{ConversationEntry, SessionRecord};

/// Short-term dialogue memory, keyed by user identifier.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// All retained lines for a user, oldest first. Empty if the user is unknown.
    async fn get(&self, user_id: &str) -> anyhow::Result<Vec<ConversationEntry>>;

    /// Append lines to the end of the user's sequence.
    async fn append(&self, user_id: &str, entries: Vec<ConversationEntry>) -> anyhow::Result<()>;

    /// Drop the oldest lines so at most `keep` remain.
    async fn evict(&self, user_id: &str, keep: usize) -> anyhow::Result<()>;
}

/// Session log, keyed by user identifier.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Sessions for a user in creation order. Empty if the user is unknown.
    async fn sessions(&self, user_id: &str) -> anyhow::Result<Vec<SessionRecord>>;

    /// Record one user/ai exchange into the user's open session, creating it on first use.
    /// A user only ever has a single session; later exchanges keep accumulating into it.
    async fn record_exchange(
        &self,
        user_id: &str,
        style: &str,
        user_text: &str,
        ai_text: &str,
        at: DateTime<Utc>,
    ) -> anyhow::Result<()>;
}
