// src/memory/mod.rs
// Per-user conversation window and session log

pub mod inmemory;
pub mod traits;
pub mod types;

pub use inmemory::{InMemoryConversationStore, InMemorySessionStore};
pub use traits::{ConversationStore, SessionStore};
pub use types::{ConversationEntry, Message, Sender, SessionRecord, Speaker};
