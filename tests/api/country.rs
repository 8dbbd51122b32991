use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use countryapi::{model::country::CountryDto, server::router};
use countryapi_test_utils::prelude::*;
use tower::ServiceExt;

use crate::{util::test_utils::read_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    router::routes().with_state(test.into_app_state())
}

fn create_request(authorization: Option<String>, continent_id: i32) -> Request<Body> {
    let body = serde_json::json!({
        "name": "France",
        "inhabitants": 68_000_000,
        "language": "French",
        "area": 643_801,
        "pkb": 3_000,
        "continent_id": continent_id,
    });

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/country/create")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(authorization) = authorization {
        builder = builder.header(header::AUTHORIZATION, authorization);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Expect the token subject to become the owner
#[tokio::test]
async fn creates_with_bearer_subject_as_owner() -> Result<(), TestError> {
    let test = test_setup_with_country_tables!()?;
    let europe = test.continent().insert_continent("Europe", "EU").await?;

    let resp = app(&test)
        .oneshot(create_request(Some(auth::bearer("user-42")), europe.id))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let country: CountryDto = read_json(resp).await;
    assert_eq!(country.user_id, "user-42");

    Ok(())
}

/// Expect 403 for missing, expired, foreign-signed or subject-less tokens
#[tokio::test]
async fn denies_unverified_tokens() -> Result<(), TestError> {
    let test = test_setup_with_country_tables!()?;
    let europe = test.continent().insert_continent("Europe", "EU").await?;

    let unverified = [
        None,
        Some("Bearer not-a-jwt".to_string()),
        Some(format!("Bearer {}", auth::expired_token("user-1"))),
        Some(format!(
            "Bearer {}",
            auth::mock_token_with_secret("user-1", "other-secret")
        )),
        Some(format!("Bearer {}", auth::mock_token_without_subject())),
    ];

    for authorization in unverified {
        let resp = app(&test)
            .oneshot(create_request(authorization, europe.id))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    Ok(())
}

/// Expect the owner's token to delete and another user's token to be denied
#[tokio::test]
async fn deletes_only_with_owner_token() -> Result<(), TestError> {
    let test = test_setup_with_country_tables!()?;
    let europe = test.continent().insert_continent("Europe", "EU").await?;
    let france = test
        .country()
        .insert_mock_country("France", europe.id, "owner")
        .await?;

    let delete = |sub: &str| {
        Request::builder()
            .method(Method::DELETE)
            .uri(format!("/api/country/{}", france.id))
            .header(header::AUTHORIZATION, auth::bearer(sub))
            .body(Body::empty())
            .unwrap()
    };

    let resp = app(&test).oneshot(delete("intruder")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app(&test).oneshot(delete("owner")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect static segments to win over the ID route
#[tokio::test]
async fn routes_static_segments_before_ids() -> Result<(), TestError> {
    let test = test_setup_with_country_tables!()?;
    let europe = test.continent().insert_continent("Europe", "EU").await?;
    test.country()
        .insert_country("A", europe.id, "user-1", 10, 5, 100)
        .await?;

    let get = |uri: String| Request::builder().uri(uri).body(Body::empty()).unwrap();

    let resp = app(&test)
        .oneshot(get("/api/country/all".to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(&test)
        .oneshot(get(
            "/api/country/inhabitants/filter?inhabitants_start=0&inhabitants_stop=10".to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let countries: Vec<CountryDto> = read_json(resp).await;
    assert_eq!(countries.len(), 1);

    let resp = app(&test)
        .oneshot(get(format!(
            "/api/country/continent/summary/by?continent_id={}",
            europe.id
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
