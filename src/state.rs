// src/state.rs

use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::{verifier_from_config, IdentityVerifier};
use crate::chat::ChatService;
use crate::config::MindfulConfig;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::memory::{InMemoryConversationStore, InMemorySessionStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MindfulConfig>,
    pub chat_service: Arc<ChatService>,
    pub verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Wire the production collaborators from configuration.
    pub fn from_config(config: MindfulConfig) -> anyhow::Result<Self> {
        let provider = match GeminiProvider::from_config(&config)? {
            Some(gemini) => {
                info!("Model: {} via {}", gemini.model(), config.gemini_base_url);
                Some(Arc::new(gemini) as Arc<dyn LlmProvider>)
            }
            None => {
                warn!("GEMINI_API_KEY not set, /chat will answer with the fallback reply");
                None
            }
        };
        let verifier = verifier_from_config(&config);
        Ok(Self::new(config, provider, verifier))
    }

    /// Fresh in-memory stores around the given model and verifier.
    pub fn new(
        config: MindfulConfig,
        provider: Option<Arc<dyn LlmProvider>>,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        let chat_service = Arc::new(ChatService::new(
            provider,
            Arc::new(InMemoryConversationStore::new()),
            Arc::new(InMemorySessionStore::new()),
            config.history_window,
        ));

        Self {
            config: Arc::new(config),
            chat_service,
            verifier,
        }
    }
}
