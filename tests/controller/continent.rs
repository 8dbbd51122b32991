use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use countryapi::{
    model::continent::{ContinentDto, ContinentInDto},
    server::controller::continent::{
        create_continent, delete_continent, get_all_continents, get_continent_by_alias,
        update_continent,
    },
};
use countryapi_test_utils::prelude::*;

use crate::{util::test_utils::read_json, TestContextExt};

fn input(name: &str, alias: &str) -> Json<ContinentInDto> {
    Json(ContinentInDto {
        name: name.to_string(),
        alias: alias.to_string(),
    })
}

/// Expect 201 Created with the stored continent
#[tokio::test]
async fn creates_continent() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Continent)?;

    let result = create_continent(State(test.into_app_state()), input("Europe", "EU")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let continent: ContinentDto = read_json(resp).await;
    assert_eq!(continent.alias, "EU");

    Ok(())
}

/// Expect 400 Bad Request when the alias is taken
#[tokio::test]
async fn rejects_duplicate_alias() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Continent)
        .with_continent("Europe", "EU")
        .build()
        .await?;

    let result = create_continent(State(test.into_app_state()), input("Eurasia", "EU")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 201 on update and 404 for a missing continent
#[tokio::test]
async fn updates_existing_continent_only() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Continent)?;
    let europe = test.continent().insert_continent("Europe", "EU").await?;

    let result = update_continent(
        State(test.into_app_state()),
        Path(europe.id),
        input("Europa", "EU"),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    let result = update_continent(
        State(test.into_app_state()),
        Path(europe.id + 1),
        input("Asia", "AS"),
    )
    .await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect lookups by alias and the name-ordered list
#[tokio::test]
async fn finds_continents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Continent)
        .with_continent("Europe", "EU")
        .with_continent("Africa", "AF")
        .build()
        .await?;

    let resp = get_continent_by_alias(State(test.into_app_state()), Path("AF".to_string()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let africa: ContinentDto = read_json(resp).await;
    assert_eq!(africa.name, "Africa");

    let resp = get_all_continents(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    let continents: Vec<ContinentDto> = read_json(resp).await;
    assert_eq!(continents[0].name, "Africa");
    assert_eq!(continents[1].name, "Europe");

    Ok(())
}

/// Expect 204 when deleting and 400 when countries still reference the continent
#[tokio::test]
async fn deletes_unreferenced_continent() -> Result<(), TestError> {
    let test = test_setup_with_country_tables!()?;
    let europe = test.continent().insert_continent("Europe", "EU").await?;
    let asia = test.continent().insert_continent("Asia", "AS").await?;
    test.country()
        .insert_mock_country("France", europe.id, "user-1")
        .await?;

    let result = delete_continent(State(test.into_app_state()), Path(asia.id)).await;
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    let result = delete_continent(State(test.into_app_state()), Path(europe.id)).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}
