// src/chat/mod.rs

pub mod locks;
pub mod service;

pub use service::{ChatError, ChatService, ReplyOutcome, ReplyRequest};
