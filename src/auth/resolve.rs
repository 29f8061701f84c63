// src/auth/resolve.rs

use axum::http::{header::AUTHORIZATION, HeaderMap};
use tracing::debug;

use super::IdentityVerifier;

/// Token from an `Authorization: Bearer <token>` header, if present and non-empty.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Effective user id for a request: the verified subject when a valid bearer
/// token is present, otherwise the id the client supplied. Failures are not reported.
pub async fn resolve_user_id(
    verifier: &dyn IdentityVerifier,
    headers: &HeaderMap,
    supplied: &str,
) -> String {
    let Some(token) = bearer_token(headers) else {
        return supplied.to_string();
    };

    match verifier.verify(token).await {
        Ok(claims) => claims.sub,
        Err(e) => {
            debug!("Ignoring unverifiable bearer token: {}", e);
            supplied.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SharedSecretVerifier;
    use crate::auth::IdentityClaims;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcg==")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn verified_subject_overrides_supplied_id() {
        let verifier = SharedSecretVerifier::new("k".to_string());
        let claims = IdentityClaims {
            sub: "verified-sub".to_string(),
            email: None,
            name: None,
            exp: (chrono::Utc::now().timestamp() + 600) as usize,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"k")).unwrap();

        let resolved = resolve_user_id(&verifier, &headers(&format!("Bearer {token}")), "client-id").await;
        assert_eq!(resolved, "verified-sub");
    }

    #[tokio::test]
    async fn invalid_token_keeps_supplied_id() {
        let verifier = SharedSecretVerifier::new("k".to_string());
        let resolved = resolve_user_id(&verifier, &headers("Bearer junk"), "client-id").await;
        assert_eq!(resolved, "client-id");

        let resolved = resolve_user_id(&verifier, &HeaderMap::new(), "client-id").await;
        assert_eq!(resolved, "client-id");
    }
}
