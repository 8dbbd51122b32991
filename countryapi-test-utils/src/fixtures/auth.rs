//! Factory functions for bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;

use crate::constant::TEST_JWT_SECRET;

#[derive(Serialize)]
struct MockClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    exp: i64,
}

fn encode(claims: &MockClaims, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("HS256 encoding of test claims cannot fail")
}

fn expires_in(duration: Duration) -> i64 {
    (Utc::now() + duration).timestamp()
}

/// HS256 token for `sub`, valid for 15 minutes, signed with the test secret
pub fn mock_token(sub: &str) -> String {
    mock_token_with_secret(sub, TEST_JWT_SECRET)
}

/// HS256 token for `sub` signed with an arbitrary secret
pub fn mock_token_with_secret(sub: &str, secret: &str) -> String {
    let claims = MockClaims {
        sub: Some(sub.to_string()),
        exp: expires_in(Duration::minutes(15)),
    };

    encode(&claims, secret)
}

/// Token for `sub` that expired an hour ago, well past the default leeway
pub fn expired_token(sub: &str) -> String {
    let claims = MockClaims {
        sub: Some(sub.to_string()),
        exp: expires_in(Duration::hours(-1)),
    };

    encode(&claims, TEST_JWT_SECRET)
}

/// Valid token without a `sub` claim
pub fn mock_token_without_subject() -> String {
    let claims = MockClaims {
        sub: None,
        exp: expires_in(Duration::minutes(15)),
    };

    encode(&claims, TEST_JWT_SECRET)
}

/// `Authorization` header value carrying a valid token for `sub`
pub fn bearer(sub: &str) -> String {
    format!("Bearer {}", mock_token(sub))
}
