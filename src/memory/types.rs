// src/memory/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who spoke a conversation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Therapist,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Therapist => "Therapist",
        }
    }
}

/// One line of the short-term conversation window, rendered as `"User: ..."`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::User, text: text.into() }
    }

    pub fn therapist(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::Therapist, text: text.into() }
    }
}

impl std::fmt::Display for ConversationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.speaker.label(), self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A user's accumulating session log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    /// Persona in effect at the most recent update.
    pub style: String,
    pub messages: Vec<Message>,
}

impl SessionRecord {
    pub fn open(user_id: &str, style: &str, at: DateTime<Utc>) -> Self {
        Self {
            id: format!("{}_{}", user_id, at.timestamp()),
            started_at: at,
            last_updated: at,
            style: style.to_string(),
            messages: Vec::new(),
        }
    }

    /// Append one user/ai exchange sharing a single timestamp.
    pub fn push_exchange(&mut self, style: &str, user_text: &str, ai_text: &str, at: DateTime<Utc>) {
        self.style = style.to_string();
        self.messages.push(Message {
            sender: Sender::User,
            text: user_text.to_string(),
            timestamp: at,
        });
        self.messages.push(Message {
            sender: Sender::Ai,
            text: ai_text.to_string(),
            timestamp: at,
        });
        self.last_updated = at;
    }

    /// Text of the first ai message, or empty.
    pub fn preview(&self) -> &str {
        self.messages
            .iter()
            .find(|m| m.sender == Sender::Ai)
            .map(|m| m.text.as_str())
            .unwrap_or("")
    }
}
