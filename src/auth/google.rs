// src/auth/google.rs
//! Google Sign-In ID token verification against Google's published JWKS.

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{AuthError, IdentityClaims, IdentityVerifier};

const GOOGLE_CERTS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";
const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Google rotates keys roughly daily; an hour keeps us well inside that.
const KEY_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Floor between fetches, however many unknown kids arrive.
const MIN_REFETCH_INTERVAL: Duration = Duration::from_secs(60);

struct CachedKeys {
    set: JwkSet,
    fetched_at: Instant,
}

pub struct GoogleIdTokenVerifier {
    client: Client,
    client_id: Option<String>,
    certs_url: String,
    cache_ttl: Duration,
    min_refetch: Duration,
    keys: RwLock<Option<CachedKeys>>,
}

impl GoogleIdTokenVerifier {
    pub fn new(client_id: Option<String>) -> Self {
        Self::with_certs_url(client_id, GOOGLE_CERTS_URL.to_string())
    }

    pub fn with_certs_url(client_id: Option<String>, certs_url: String) -> Self {
        Self {
            client: Client::new(),
            client_id,
            certs_url,
            cache_ttl: KEY_CACHE_TTL,
            min_refetch: MIN_REFETCH_INTERVAL,
            keys: RwLock::new(None),
        }
    }

    #[cfg(test)]
    fn with_timings(mut self, cache_ttl: Duration, min_refetch: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self.min_refetch = min_refetch;
        self
    }

    async fn fetch_keys(&self) -> Result<JwkSet, AuthError> {
        let set = self
            .client
            .get(&self.certs_url)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;
        info!("Fetched {} Google signing keys", set.keys.len());
        Ok(set)
    }

    /// Key for `kid`. A stale cache or an unknown kid triggers a refetch, but
    /// never more often than `min_refetch`.
    async fn decoding_key(&self, kid: Option<&str>) -> Result<DecodingKey, AuthError> {
        let unknown = || AuthError::UnknownKey(kid.map(str::to_string));

        {
            let cached = self.keys.read().await;
            if let Some(cached) = cached.as_ref() {
                let age = cached.fetched_at.elapsed();
                if age < self.cache_ttl {
                    if let Some(key) = find_key(&cached.set, kid)? {
                        return Ok(key);
                    }
                    if age < self.min_refetch {
                        debug!("No key for kid {:?} in a set fetched {:?} ago", kid, age);
                        return Err(unknown());
                    }
                }
            }
        }

        let mut cached = self.keys.write().await;
        // Someone else may have refreshed while we waited for the lock.
        if let Some(current) = cached.as_ref() {
            if current.fetched_at.elapsed() < self.min_refetch {
                return find_key(&current.set, kid)?.ok_or_else(unknown);
            }
        }

        let set = self.fetch_keys().await?;
        let key = find_key(&set, kid)?;
        *cached = Some(CachedKeys {
            set,
            fetched_at: Instant::now(),
        });
        key.ok_or_else(unknown)
    }

    fn validation(client_id: &str) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[client_id]);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation
    }
}

fn find_key(set: &JwkSet, kid: Option<&str>) -> Result<Option<DecodingKey>, AuthError> {
    let jwk = match kid {
        Some(kid) => set.find(kid),
        None => set.keys.first(),
    };
    match jwk {
        Some(jwk) => Ok(Some(DecodingKey::from_jwk(jwk)?)),
        None => Ok(None),
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdTokenVerifier {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        let client_id = self.client_id.as_deref().ok_or(AuthError::NotConfigured)?;

        let header = decode_header(token)?;
        let key = self.decoding_key(header.kid.as_deref()).await?;
        let data = decode::<IdentityClaims>(token, &key, &Self::validation(client_id))?;

        debug!("Verified Google ID token for subject {}", data.claims.sub);
        Ok(data.claims)
    }
}
