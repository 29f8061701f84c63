// src/auth/mod.rs
// Verification of externally issued identity tokens

pub mod google;
pub mod jwt;
pub mod resolve;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::MindfulConfig;

pub use google::GoogleIdTokenVerifier;
pub use jwt::SharedSecretVerifier;
pub use resolve::{bearer_token, resolve_user_id};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub sub: String, // stable subject id, becomes the user_id
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub exp: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Identity verification is not configured")]
    NotConfigured,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("No signing key for kid {0:?}")]
    UnknownKey(Option<String>),

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to fetch signing keys: {0}")]
    KeyFetch(#[from] reqwest::Error),
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError>;
}

/// Shared secret wins when set; otherwise Google ID tokens (rejected without a client id).
pub fn verifier_from_config(config: &MindfulConfig) -> Arc<dyn IdentityVerifier> {
    match &config.jwt_secret {
        Some(secret) => Arc::new(SharedSecretVerifier::new(secret.clone())),
        None => Arc::new(GoogleIdTokenVerifier::new(config.google_client_id.clone())),
    }
}
