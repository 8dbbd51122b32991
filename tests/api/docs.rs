use axum::{body::Body, http::Request, http::StatusCode};
use countryapi::server::router;
use countryapi_test_utils::prelude::*;
use tower::ServiceExt;

use crate::{util::test_utils::read_json, TestContextExt};

/// Expect the OpenAPI document to list the owner-guarded country routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = router::routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: serde_json::Value = read_json(resp).await;
    assert!(doc["paths"]["/api/country/create"]["post"].is_object());
    assert!(doc["paths"]["/api/favourite/ranking"]["get"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearer_auth"].is_object());

    Ok(())
}
