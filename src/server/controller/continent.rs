use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        continent::{ContinentDto, ContinentInDto},
    },
    server::{
        data::continent::ContinentRepository, error::Error, model::app::AppState,
        service::continent::ContinentService,
    },
};

pub static CONTINENT_TAG: &str = "continent";

/// Create a continent
#[utoipa::path(
    post,
    path = "/api/continent/create",
    tag = CONTINENT_TAG,
    request_body = ContinentInDto,
    responses(
        (status = 201, description = "Continent created", body = ContinentDto),
        (status = 400, description = "Name or alias already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_continent(
    State(state): State<AppState>,
    Json(continent): Json<ContinentInDto>,
) -> Result<impl IntoResponse, Error> {
    let service = ContinentService::new(ContinentRepository::new(&state.db));
    let continent = service.create(continent).await?;

    Ok((StatusCode::CREATED, Json(continent)))
}

/// Replace name & alias of a continent
#[utoipa::path(
    put,
    path = "/api/continent/{continent_id}",
    tag = CONTINENT_TAG,
    params(("continent_id" = i32, Path, description = "Continent ID")),
    request_body = ContinentInDto,
    responses(
        (status = 201, description = "Continent updated", body = ContinentDto),
        (status = 400, description = "Name or alias already taken", body = ErrorDto),
        (status = 404, description = "Continent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_continent(
    State(state): State<AppState>,
    Path(continent_id): Path<i32>,
    Json(continent): Json<ContinentInDto>,
) -> Result<impl IntoResponse, Error> {
    let service = ContinentService::new(ContinentRepository::new(&state.db));
    let continent = service.update(continent_id, continent).await?;

    Ok((StatusCode::CREATED, Json(continent)))
}

/// Delete a continent no country references
#[utoipa::path(
    delete,
    path = "/api/continent/{continent_id}",
    tag = CONTINENT_TAG,
    params(("continent_id" = i32, Path, description = "Continent ID")),
    responses(
        (status = 204, description = "Continent deleted"),
        (status = 400, description = "Continent still referenced by countries", body = ErrorDto),
        (status = 404, description = "Continent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_continent(
    State(state): State<AppState>,
    Path(continent_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = ContinentService::new(ContinentRepository::new(&state.db));
    service.delete(continent_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List all continents ordered by name
#[utoipa::path(
    get,
    path = "/api/continent/all",
    tag = CONTINENT_TAG,
    responses(
        (status = 200, description = "All continents", body = Vec<ContinentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_continents(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = ContinentService::new(ContinentRepository::new(&state.db));
    let continents = service.get_all().await?;

    Ok((StatusCode::OK, Json(continents)))
}

#[utoipa::path(
    get,
    path = "/api/continent/{continent_id}",
    tag = CONTINENT_TAG,
    params(("continent_id" = i32, Path, description = "Continent ID")),
    responses(
        (status = 200, description = "Continent found", body = ContinentDto),
        (status = 404, description = "Continent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_continent_by_id(
    State(state): State<AppState>,
    Path(continent_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = ContinentService::new(ContinentRepository::new(&state.db));
    let continent = service.get_by_id(continent_id).await?;

    Ok((StatusCode::OK, Json(continent)))
}

#[utoipa::path(
    get,
    path = "/api/continent/alias/{alias}",
    tag = CONTINENT_TAG,
    params(("alias" = String, Path, description = "Continent alias")),
    responses(
        (status = 200, description = "Continent found", body = ContinentDto),
        (status = 404, description = "Continent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_continent_by_alias(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = ContinentService::new(ContinentRepository::new(&state.db));
    let continent = service.get_by_alias(&alias).await?;

    Ok((StatusCode::OK, Json(continent)))
}

#[utoipa::path(
    get,
    path = "/api/continent/name/{name}",
    tag = CONTINENT_TAG,
    params(("name" = String, Path, description = "Continent name")),
    responses(
        (status = 200, description = "Continent found", body = ContinentDto),
        (status = 404, description = "Continent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_continent_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = ContinentService::new(ContinentRepository::new(&state.db));
    let continent = service.get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(continent)))
}
