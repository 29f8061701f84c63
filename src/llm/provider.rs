// src/llm/provider.rs
// Text-completion seam over the external model

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Request to model failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Model API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected model response: {0}")]
    Decode(String),
}

/// Prompt in, completion out.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the call succeeded but the model produced no text.
    async fn complete(&self, prompt: &str) -> Result<Option<String>, LlmError>;
}
