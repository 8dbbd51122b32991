use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use countryapi::{
    model::visited::{VisitedDto, VisitedInDto},
    server::controller::{
        util::identity::Identity,
        visited::{
            create_visited, delete_visited, get_visited_by_id, get_visited_by_user, update_visited,
        },
    },
};
use countryapi_test_utils::prelude::*;

use crate::{util::test_utils::read_json, TestContextExt};

/// Expect every visit of the caller to be listed
#[tokio::test]
async fn lists_visits_of_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Visited)?;

    for name in ["Peru", "Chile"] {
        let result = create_visited(
            State(test.into_app_state()),
            Identity(Some("user-1".to_string())),
            Json(VisitedInDto {
                country_name: name.to_string(),
            }),
        )
        .await;
        assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);
    }

    let resp = get_visited_by_user(State(test.into_app_state()), Path("user-1".to_string()))
        .await
        .unwrap()
        .into_response();
    let visits: Vec<VisitedDto> = read_json(resp).await;

    assert_eq!(visits.len(), 2);
    assert!(visits.iter().all(|v| v.user_id == "user-1"));

    Ok(())
}

/// Expect 403 when updating or deleting another user's visit and the visit unchanged
#[tokio::test]
async fn denies_mutation_by_non_owner() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Visited)?;
    let visit = test.visited().insert_visited("Peru", "user-1").await?;

    let result = update_visited(
        State(test.into_app_state()),
        Identity(Some("user-2".to_string())),
        Path(visit.id),
        Json(VisitedInDto {
            country_name: "Chile".to_string(),
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    let result = delete_visited(
        State(test.into_app_state()),
        Identity(Some("user-2".to_string())),
        Path(visit.id),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    let resp = get_visited_by_id(State(test.into_app_state()), Path(visit.id))
        .await
        .unwrap()
        .into_response();
    let unchanged: VisitedDto = read_json(resp).await;
    assert_eq!(unchanged.country_name, "Peru");
    assert_eq!(unchanged.user_id, "user-1");

    Ok(())
}
