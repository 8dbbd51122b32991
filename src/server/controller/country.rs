use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        country::{CountryDetailsDto, CountryDto, CountryInDto},
        summary::SummaryDto,
    },
    server::{
        controller::util::identity::Identity, data::country::CountryRepository, error::Error,
        model::app::AppState, service::country::CountryService,
    },
};

pub static COUNTRY_TAG: &str = "country";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// Continent to summarize
    pub continent_id: i32,
}

/// Inclusive inhabitants range
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InhabitantsRange {
    pub inhabitants_start: i64,
    pub inhabitants_stop: i64,
}

/// Inclusive area range
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AreaRange {
    pub area_start: i64,
    pub area_stop: i64,
}

/// Inclusive pkb range
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PkbRange {
    pub pkb_start: i64,
    pub pkb_stop: i64,
}

/// Create a country owned by the caller
#[utoipa::path(
    post,
    path = "/api/country/create",
    tag = COUNTRY_TAG,
    request_body = CountryInDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Country created", body = CountryDto),
        (status = 400, description = "Country name taken or invalid field", body = ErrorDto),
        (status = 403, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Continent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    identity: Identity,
    Json(country): Json<CountryInDto>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let country = service.create(identity.user_id(), country).await?;

    Ok((StatusCode::CREATED, Json(country)))
}

/// Replace every field of a country owned by the caller
#[utoipa::path(
    put,
    path = "/api/country/{country_id}",
    tag = COUNTRY_TAG,
    params(("country_id" = i32, Path, description = "Country ID")),
    request_body = CountryInDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Country updated", body = CountryDto),
        (status = 400, description = "Country name taken, invalid field or continent missing", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    identity: Identity,
    Path(country_id): Path<i32>,
    Json(country): Json<CountryInDto>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let country = service
        .update(identity.user_id(), country_id, country)
        .await?;

    Ok((StatusCode::CREATED, Json(country)))
}

/// Delete a country owned by the caller
#[utoipa::path(
    delete,
    path = "/api/country/{country_id}",
    tag = COUNTRY_TAG,
    params(("country_id" = i32, Path, description = "Country ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Country deleted"),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    identity: Identity,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    service.delete(identity.user_id(), country_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List all countries with their continent, ordered by name
#[utoipa::path(
    get,
    path = "/api/country/all",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "All countries", body = Vec<CountryDetailsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_countries(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service.get_all().await?;

    Ok((StatusCode::OK, Json(countries)))
}

/// Totals & averages of the countries of one continent
///
/// A continent without countries, or an unknown continent, yields all zeros.
#[utoipa::path(
    get,
    path = "/api/country/continent/summary/by",
    tag = COUNTRY_TAG,
    params(SummaryQuery),
    responses(
        (status = 200, description = "Continent summary", body = SummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary_by_continent(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let summary = service.get_summary_by_continent(query.continent_id).await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Summaries keyed by continent ID, for every continent with at least one country
#[utoipa::path(
    get,
    path = "/api/country/continent/summary/all",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "Summary per continent ID", body = BTreeMap<i32, SummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary_by_all_continents(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let summaries = service.get_summary_by_all_continents().await?;

    Ok((StatusCode::OK, Json(summaries)))
}

#[utoipa::path(
    get,
    path = "/api/country/{country_id}",
    tag = COUNTRY_TAG,
    params(("country_id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Country with its continent", body = CountryDetailsDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country_by_id(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let country = service.get_by_id(country_id).await?;

    Ok((StatusCode::OK, Json(country)))
}

#[utoipa::path(
    get,
    path = "/api/country/name/{name}",
    tag = COUNTRY_TAG,
    params(("name" = String, Path, description = "Country name")),
    responses(
        (status = 200, description = "Country with its continent", body = CountryDetailsDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let country = service.get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(country)))
}

/// Countries of a continent
#[utoipa::path(
    get,
    path = "/api/country/continent/{continent_id}",
    tag = COUNTRY_TAG,
    params(("continent_id" = i32, Path, description = "Continent ID")),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries_by_continent(
    State(state): State<AppState>,
    Path(continent_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service.get_by_continent(continent_id).await?;

    Ok((StatusCode::OK, Json(countries)))
}

/// Countries created by a user
#[utoipa::path(
    get,
    path = "/api/country/user/{user_id}",
    tag = COUNTRY_TAG,
    params(("user_id" = String, Path, description = "Owner user ID")),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service.get_by_user(&user_id).await?;

    Ok((StatusCode::OK, Json(countries)))
}

#[utoipa::path(
    get,
    path = "/api/country/inhabitants/{inhabitants}",
    tag = COUNTRY_TAG,
    params(("inhabitants" = i64, Path, description = "Exact number of inhabitants")),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries_by_inhabitants(
    State(state): State<AppState>,
    Path(inhabitants): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service.get_by_inhabitants(inhabitants).await?;

    Ok((StatusCode::OK, Json(countries)))
}

#[utoipa::path(
    get,
    path = "/api/country/language/{language}",
    tag = COUNTRY_TAG,
    params(("language" = String, Path, description = "Language")),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries_by_language(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service.get_by_language(&language).await?;

    Ok((StatusCode::OK, Json(countries)))
}

#[utoipa::path(
    get,
    path = "/api/country/area/{area}",
    tag = COUNTRY_TAG,
    params(("area" = i64, Path, description = "Exact area")),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries_by_area(
    State(state): State<AppState>,
    Path(area): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service.get_by_area(area).await?;

    Ok((StatusCode::OK, Json(countries)))
}

#[utoipa::path(
    get,
    path = "/api/country/pkb/{pkb}",
    tag = COUNTRY_TAG,
    params(("pkb" = i64, Path, description = "Exact pkb")),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries_by_pkb(
    State(state): State<AppState>,
    Path(pkb): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service.get_by_pkb(pkb).await?;

    Ok((StatusCode::OK, Json(countries)))
}

/// Countries with inhabitants between start & stop, inclusive
#[utoipa::path(
    get,
    path = "/api/country/inhabitants/filter",
    tag = COUNTRY_TAG,
    params(InhabitantsRange),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_countries_by_inhabitants(
    State(state): State<AppState>,
    Query(range): Query<InhabitantsRange>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service
        .filter_by_inhabitants(range.inhabitants_start, range.inhabitants_stop)
        .await?;

    Ok((StatusCode::OK, Json(countries)))
}

/// Countries with an area between start & stop, inclusive
#[utoipa::path(
    get,
    path = "/api/country/area/filter",
    tag = COUNTRY_TAG,
    params(AreaRange),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_countries_by_area(
    State(state): State<AppState>,
    Query(range): Query<AreaRange>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service
        .filter_by_area(range.area_start, range.area_stop)
        .await?;

    Ok((StatusCode::OK, Json(countries)))
}

/// Countries with a pkb between start & stop, inclusive
#[utoipa::path(
    get,
    path = "/api/country/pkb/filter",
    tag = COUNTRY_TAG,
    params(PkbRange),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_countries_by_pkb(
    State(state): State<AppState>,
    Query(range): Query<PkbRange>,
) -> Result<impl IntoResponse, Error> {
    let service = CountryService::new(CountryRepository::new(&state.db));
    let countries = service
        .filter_by_pkb(range.pkb_start, range.pkb_stop)
        .await?;

    Ok((StatusCode::OK, Json(countries)))
}
