use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use countryapi::{
    model::favourite::{FavouriteDto, FavouriteInDto, RankingEntryDto},
    server::controller::{
        favourite::{
            create_favourite, delete_favourite, get_favourite_by_id, get_favourite_ranking,
            update_favourite,
        },
        util::identity::Identity,
    },
};
use countryapi_test_utils::prelude::*;

use crate::{util::test_utils::read_json, TestContextExt};

fn input(name: &str) -> Json<FavouriteInDto> {
    Json(FavouriteInDto {
        country_name: name.to_string(),
    })
}

/// Expect 201 for the first favourite and 400 for the second
#[tokio::test]
async fn allows_one_favourite_per_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Favourite)?;
    let caller = || Identity(Some("user-1".to_string()));

    let result = create_favourite(State(test.into_app_state()), caller(), input("France")).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let favourite: FavouriteDto = read_json(resp).await;
    assert_eq!(favourite.user_id, "user-1");

    let result = create_favourite(State(test.into_app_state()), caller(), input("Japan")).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expect 403 without a verified identity
#[tokio::test]
async fn denies_anonymous_favourite() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Favourite)?;

    let result =
        create_favourite(State(test.into_app_state()), Identity(None), input("France")).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}

/// Expect X with 3 favourites ahead of Y with 2
#[tokio::test]
async fn ranks_favourites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Favourite)
        .with_favourite("X", "u1")
        .with_favourite("Y", "u2")
        .with_favourite("X", "u3")
        .with_favourite("Y", "u4")
        .with_favourite("X", "u5")
        .build()
        .await?;

    let resp = get_favourite_ranking(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let ranking: Vec<RankingEntryDto> = read_json(resp).await;
    assert_eq!(
        ranking,
        vec![
            RankingEntryDto {
                country_name: "X".to_string(),
                count: 3,
            },
            RankingEntryDto {
                country_name: "Y".to_string(),
                count: 2,
            },
        ]
    );

    Ok(())
}

/// Expect 403 when updating or deleting another user's favourite and the favourite unchanged
#[tokio::test]
async fn denies_mutation_by_non_owner() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Favourite)?;
    let favourite = test.favourite().insert_favourite("France", "user-1").await?;

    let result = update_favourite(
        State(test.into_app_state()),
        Identity(Some("user-2".to_string())),
        Path(favourite.id),
        input("Spain"),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    let result = delete_favourite(
        State(test.into_app_state()),
        Identity(Some("user-2".to_string())),
        Path(favourite.id),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    let resp = get_favourite_by_id(State(test.into_app_state()), Path(favourite.id))
        .await
        .unwrap()
        .into_response();
    let unchanged: FavouriteDto = read_json(resp).await;
    assert_eq!(unchanged.country_name, "France");
    assert_eq!(unchanged.user_id, "user-1");

    Ok(())
}
