// src/memory/inmemory.rs

//! Process-lifetime stores backed by `RwLock<HashMap<..>>`. Everything is lost on restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::memory::traits::{ConversationStore, SessionStore};
use crate::memory::types::{ConversationEntry, SessionRecord};

#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    lines: Arc<RwLock<HashMap<String, Vec<ConversationEntry>>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn user_count(&self) -> usize {
        self.lines.read().await.len()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get(&self, user_id: &str) -> anyhow::Result<Vec<ConversationEntry>> {
        let lines = self.lines.read().await;
        Ok(lines.get(user_id).cloned().unwrap_or_default())
    }

    async fn append(&self, user_id: &str, entries: Vec<ConversationEntry>) -> anyhow::Result<()> {
        let mut lines = self.lines.write().await;
        lines.entry(user_id.to_string()).or_default().extend(entries);
        Ok(())
    }

    async fn evict(&self, user_id: &str, keep: usize) -> anyhow::Result<()> {
        let mut lines = self.lines.write().await;
        if let Some(seq) = lines.get_mut(user_id) {
            let excess = seq.len().saturating_sub(keep);
            seq.drain(..excess);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Vec<SessionRecord>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn user_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn sessions(&self, user_id: &str) -> anyhow::Result<Vec<SessionRecord>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(user_id).cloned().unwrap_or_default())
    }

    async fn record_exchange(
        &self,
        user_id: &str,
        style: &str,
        user_text: &str,
        ai_text: &str,
        at: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let mut sessions = self.sessions.write().await;
        let log = sessions.entry(user_id.to_string()).or_default();
        if log.is_empty() {
            log.push(SessionRecord::open(user_id, style, at));
        }
        // No rotation: session[0] is the only one a user ever gets.
        log[0].push_exchange(style, user_text, ai_text, at);
        Ok(())
    }
}
