// tests/auth_api.rs

mod test_helpers;

use axum::http::StatusCode;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use tower::ServiceExt;

use mindful::auth::IdentityClaims;
use test_helpers::*;

#[tokio::test]
async fn me_without_header_is_unauthorized() {
    let app = create_test_app(None);

    let response = app.oneshot(get_request("/auth/me", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["error_code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn me_with_unverifiable_token_is_unauthorized() {
    let app = create_test_app(None);

    // Well-formed JWT, signed with the wrong secret.
    let claims = IdentityClaims {
        sub: "mallory".to_string(),
        email: None,
        name: None,
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    let forged = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"wrong")).unwrap();

    let response = app
        .clone()
        .oneshot(get_request("/auth/me", Some(&forged)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.oneshot(get_request("/auth/me", Some("a.b.c"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_non_bearer_scheme_is_unauthorized() {
    let app = create_test_app(None);

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/auth/me")
                .header("authorization", "Basic dXNlcjpwYXNz")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_returns_claims() {
    let app = create_test_app(None);
    let token = mint_token("sub-123", Some("sam@example.com"), Some("Sam"));

    let response = app.oneshot(get_request("/auth/me", Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"user_id": "sub-123", "email": "sam@example.com", "name": "Sam"})
    );
}

#[tokio::test]
async fn me_with_minimal_claims_returns_nulls() {
    let app = create_test_app(None);
    let token = mint_token("sub-only", None, None);

    let response = app.oneshot(get_request("/auth/me", Some(&token))).await.unwrap();

    assert_eq!(
        json_body(response).await,
        json!({"user_id": "sub-only", "email": null, "name": null})
    );
}
