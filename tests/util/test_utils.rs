//! Test utilities for building AppState and reading responses

use axum::{body::Body, response::Response};
use countryapi::server::{model::app::AppState, service::identity::IdentityVerifier};
use countryapi_test_utils::{constant::TEST_JWT_SECRET, TestContext};
use jsonwebtoken::Algorithm;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create AppState verifying tokens signed with the test secret
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            identity: IdentityVerifier::new(TEST_JWT_SECRET, Algorithm::HS256),
        }
    }
}

/// Deserializes a JSON response body
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
