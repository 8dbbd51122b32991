//! Bearer token verification.
//!
//! Tokens are minted by an external identity service and signed with a shared HMAC secret.
//! Verification yields the `sub` claim as the caller's user identifier; every failure mode
//! collapses into "no verified identity" and is left to the access gate to deny.

use axum::http::HeaderValue;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Option<String>,
}

/// Verifies bearer tokens against the configured secret & algorithm.
///
/// `exp` is always validated.
#[derive(Clone)]
pub struct IdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl IdentityVerifier {
    /// Creates a new instance of [`IdentityVerifier`]
    pub fn new(secret: &str, algorithm: Algorithm) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(algorithm),
        }
    }

    /// Verifies a raw token and returns its non-empty `sub` claim
    pub fn verify(&self, token: &str) -> Option<String> {
        match jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => data.claims.sub.filter(|sub| !sub.is_empty()),
            Err(e) => {
                tracing::debug!("Rejected bearer token: {}", e);

                None
            }
        }
    }

    /// Extracts and verifies the token of an `Authorization: Bearer <token>` header
    ///
    /// # Arguments
    /// - `header` - Value of the `Authorization` header, if sent
    ///
    /// # Returns
    /// - `Some(String)` - Verified user identifier
    /// - `None` - Header missing, not a bearer header, token invalid/expired or without subject
    pub fn verify_header(&self, header: Option<&HeaderValue>) -> Option<String> {
        let value = header?.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;

        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }

        self.verify(token.trim())
    }
}
