use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use countryapi::{
    model::{
        api::ErrorDto,
        country::{CountryDetailsDto, CountryDto, CountryInDto},
        summary::SummaryDto,
    },
    server::controller::{
        country::{
            create_country, delete_country, filter_countries_by_pkb, get_country_by_name,
            get_summary_by_all_continents, get_summary_by_continent, update_country, PkbRange,
            SummaryQuery,
        },
        util::identity::Identity,
    },
};
use countryapi_test_utils::prelude::*;

use crate::{util::test_utils::read_json, TestContextExt};

fn caller(user_id: &str) -> Identity {
    Identity(Some(user_id.to_string()))
}

fn input(name: &str, continent_id: i32) -> Json<CountryInDto> {
    Json(CountryInDto {
        name: name.to_string(),
        inhabitants: 68_000_000,
        language: "French".to_string(),
        area: 643_801,
        pkb: 3_000,
        continent_id,
    })
}

mod create {
    use super::*;

    /// Expect 201 Created with the caller as owner
    #[tokio::test]
    async fn creates_country_owned_by_caller() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;
        let europe = test.continent().insert_continent("Europe", "EU").await?;

        let result = create_country(
            State(test.into_app_state()),
            caller("user-1"),
            input("France", europe.id),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let country: CountryDto = read_json(resp).await;
        assert_eq!(country.user_id, "user-1");

        Ok(())
    }

    /// Expect 403 Forbidden without a verified identity
    #[tokio::test]
    async fn denies_anonymous_caller() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;
        let europe = test.continent().insert_continent("Europe", "EU").await?;

        let result = create_country(
            State(test.into_app_state()),
            Identity(None),
            input("France", europe.id),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let error: ErrorDto = read_json(resp).await;
        assert_eq!(error.error, "Unauthorized");

        Ok(())
    }

    /// Expect 404 Not Found for a continent that does not exist
    #[tokio::test]
    async fn rejects_missing_continent() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;

        let result = create_country(
            State(test.into_app_state()),
            caller("user-1"),
            input("France", 99),
        )
        .await;

        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect 403 for another user's country and the record unchanged
    #[tokio::test]
    async fn denies_non_owner() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;
        let europe = test.continent().insert_continent("Europe", "EU").await?;
        let france = test
            .country()
            .insert_mock_country("France", europe.id, "owner")
            .await?;

        let result = update_country(
            State(test.into_app_state()),
            caller("intruder"),
            Path(france.id),
            input("Spain", europe.id),
        )
        .await;

        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::FORBIDDEN
        );

        let resp = get_country_by_name(State(test.into_app_state()), Path("France".to_string()))
            .await
            .unwrap()
            .into_response();
        let france: CountryDetailsDto = read_json(resp).await;
        assert_eq!(france.user_id, "owner");
        assert_eq!(france.continent.alias, "EU");

        Ok(())
    }

    /// Expect 201 for the owner
    #[tokio::test]
    async fn updates_for_owner() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;
        let europe = test.continent().insert_continent("Europe", "EU").await?;
        let france = test
            .country()
            .insert_mock_country("France", europe.id, "owner")
            .await?;

        let result = update_country(
            State(test.into_app_state()),
            caller("owner"),
            Path(france.id),
            input("French Republic", europe.id),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let country: CountryDto = read_json(resp).await;
        assert_eq!(country.name, "French Republic");

        Ok(())
    }

    /// Expect 400 Bad Request for a continent that does not exist and the record unchanged
    #[tokio::test]
    async fn rejects_missing_continent() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;
        let europe = test.continent().insert_continent("Europe", "EU").await?;
        let france = test
            .country()
            .insert_mock_country("France", europe.id, "owner")
            .await?;

        let result = update_country(
            State(test.into_app_state()),
            caller("owner"),
            Path(france.id),
            input("France", 99),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = read_json(resp).await;
        assert_eq!(body.error, "Continent not exist");

        let resp = get_country_by_name(State(test.into_app_state()), Path("France".to_string()))
            .await
            .unwrap()
            .into_response();
        let france: CountryDetailsDto = read_json(resp).await;
        assert_eq!(france.continent.id, europe.id);

        Ok(())
    }
}

mod delete {
    use super::*;

    /// Expect 204 for the owner, then 404
    #[tokio::test]
    async fn deletes_once() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;
        let europe = test.continent().insert_continent("Europe", "EU").await?;
        let france = test
            .country()
            .insert_mock_country("France", europe.id, "owner")
            .await?;

        let result =
            delete_country(State(test.into_app_state()), caller("owner"), Path(france.id)).await;
        assert_eq!(
            result.unwrap().into_response().status(),
            StatusCode::NO_CONTENT
        );

        let result =
            delete_country(State(test.into_app_state()), caller("owner"), Path(france.id)).await;
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}

mod summary {
    use super::*;

    /// Expect the summary of two countries and one entry per populated continent
    #[tokio::test]
    async fn summarizes_by_continent() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;
        let europe = test.continent().insert_continent("Europe", "EU").await?;
        test.continent().insert_continent("Antarctica", "AN").await?;
        test.country()
            .insert_country("A", europe.id, "user-1", 10, 5, 100)
            .await?;
        test.country()
            .insert_country("B", europe.id, "user-2", 20, 15, 200)
            .await?;

        let resp = get_summary_by_continent(
            State(test.into_app_state()),
            Query(SummaryQuery {
                continent_id: europe.id,
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let summary: SummaryDto = read_json(resp).await;
        assert_eq!(
            summary,
            SummaryDto {
                total_inhabitants: 30,
                total_area: 20,
                total_pkb: 300,
                average_inhabitants: 15.0,
                average_area: 10.0,
                average_pkb: 150.0,
            }
        );

        let resp = get_summary_by_all_continents(State(test.into_app_state()))
            .await
            .unwrap()
            .into_response();
        let summaries: BTreeMap<String, SummaryDto> = read_json(resp).await;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[&europe.id.to_string()], summary);

        Ok(())
    }

    /// Expect zeros for a continent without countries
    #[tokio::test]
    async fn returns_zeros_for_empty_continent() -> Result<(), TestError> {
        let test = test_setup_with_country_tables!()?;
        let antarctica = test.continent().insert_continent("Antarctica", "AN").await?;

        let resp = get_summary_by_continent(
            State(test.into_app_state()),
            Query(SummaryQuery {
                continent_id: antarctica.id,
            }),
        )
        .await
        .unwrap()
        .into_response();

        let summary: SummaryDto = read_json(resp).await;
        assert_eq!(summary, SummaryDto::default());

        Ok(())
    }
}

/// Expect inclusive pkb bounds
#[tokio::test]
async fn filters_by_pkb_range() -> Result<(), TestError> {
    let test = test_setup_with_country_tables!()?;
    let europe = test.continent().insert_continent("Europe", "EU").await?;
    test.country()
        .insert_country("A", europe.id, "user-1", 1, 1, 100)
        .await?;
    test.country()
        .insert_country("B", europe.id, "user-1", 1, 1, 200)
        .await?;
    test.country()
        .insert_country("C", europe.id, "user-1", 1, 1, 300)
        .await?;

    let resp = filter_countries_by_pkb(
        State(test.into_app_state()),
        Query(PkbRange {
            pkb_start: 100,
            pkb_stop: 200,
        }),
    )
    .await
    .unwrap()
    .into_response();

    let countries: Vec<CountryDto> = read_json(resp).await;
    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    Ok(())
}
