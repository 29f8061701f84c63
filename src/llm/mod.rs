// src/llm/mod.rs

pub mod gemini;
pub mod provider;

pub use gemini::GeminiProvider;
pub use provider::{LlmError, LlmProvider};
