// tests/test_helpers.rs
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::{Arc, Mutex};

use mindful::auth::{IdentityClaims, SharedSecretVerifier};
use mindful::config::MindfulConfig;
use mindful::llm::{LlmError, LlmProvider};
use mindful::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// Model stand-in: always answers with the same text and remembers prompts.
pub struct FixedProvider {
    reply: Option<String>,
    fail: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl FixedProvider {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            fail: true,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn complete(&self, prompt: &str) -> Result<Option<String>, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(LlmError::Status {
                status: 503,
                body: "overloaded".to_string(),
            });
        }
        Ok(self.reply.clone())
    }
}

pub fn model(provider: &Arc<FixedProvider>) -> Option<Arc<dyn LlmProvider>> {
    Some(provider.clone() as Arc<dyn LlmProvider>)
}

pub fn test_config() -> MindfulConfig {
    MindfulConfig {
        jwt_secret: Some(TEST_SECRET.to_string()),
        ..MindfulConfig::default()
    }
}

/// App wired with an optional model and the shared-secret verifier.
pub fn create_test_app(provider: Option<Arc<dyn LlmProvider>>) -> axum::Router {
    create_test_app_with_config(test_config(), provider)
}

pub fn create_test_app_with_config(
    config: MindfulConfig,
    provider: Option<Arc<dyn LlmProvider>>,
) -> axum::Router {
    let verifier = Arc::new(SharedSecretVerifier::new(TEST_SECRET.to_string()));
    let state = Arc::new(AppState::new(config, provider, verifier));
    mindful::api::http::http_router(state)
}

pub fn mint_token(sub: &str, email: Option<&str>, name: Option<&str>) -> String {
    let claims = IdentityClaims {
        sub: sub.to_string(),
        email: email.map(str::to_string),
        name: name.map(str::to_string),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn chat_request(body: serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
