// src/auth/jwt.rs

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::{AuthError, IdentityClaims, IdentityVerifier};

/// HS256 tokens signed with a secret shared with the issuer.
pub struct SharedSecretVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SharedSecretVerifier {
    pub fn new(secret: String) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl IdentityVerifier for SharedSecretVerifier {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        let data = decode::<IdentityClaims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, exp_offset_secs: i64) -> String {
        let claims = IdentityClaims {
            sub: "google-123".to_string(),
            email: Some("sam@example.com".to_string()),
            name: Some("Sam".to_string()),
            exp: (chrono::Utc::now().timestamp() + exp_offset_secs) as usize,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[tokio::test]
    async fn accepts_token_with_matching_secret() {
        let verifier = SharedSecretVerifier::new("s3cret".to_string());
        let claims = verifier.verify(&token("s3cret", 3600)).await.unwrap();
        assert_eq!(claims.sub, "google-123");
        assert_eq!(claims.email.as_deref(), Some("sam@example.com"));
    }

    #[tokio::test]
    async fn rejects_wrong_secret() {
        let verifier = SharedSecretVerifier::new("s3cret".to_string());
        let err = verifier.verify(&token("other", 3600)).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn rejects_expired_token() {
        let verifier = SharedSecretVerifier::new("s3cret".to_string());
        assert!(verifier.verify(&token("s3cret", -3600)).await.is_err());
    }

    #[tokio::test]
    async fn rejects_garbage() {
        let verifier = SharedSecretVerifier::new("s3cret".to_string());
        assert!(verifier.verify("not.a.jwt").await.is_err());
    }
}
