use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        visited::{VisitedDto, VisitedInDto},
    },
    server::{
        controller::util::identity::Identity, data::visited::VisitedRepository, error::Error,
        model::app::AppState, service::visited::VisitedService,
    },
};

pub static VISITED_TAG: &str = "visited";

/// Record a country visited by the caller
#[utoipa::path(
    post,
    path = "/api/visited/create",
    tag = VISITED_TAG,
    request_body = VisitedInDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Visited created", body = VisitedDto),
        (status = 403, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_visited(
    State(state): State<AppState>,
    identity: Identity,
    Json(visited): Json<VisitedInDto>,
) -> Result<impl IntoResponse, Error> {
    let service = VisitedService::new(VisitedRepository::new(&state.db));
    let visited = service.create(identity.user_id(), visited).await?;

    Ok((StatusCode::CREATED, Json(visited)))
}

#[utoipa::path(
    put,
    path = "/api/visited/{visited_id}",
    tag = VISITED_TAG,
    params(("visited_id" = i32, Path, description = "Visited ID")),
    request_body = VisitedInDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Visited updated", body = VisitedDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Visited not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_visited(
    State(state): State<AppState>,
    identity: Identity,
    Path(visited_id): Path<i32>,
    Json(visited): Json<VisitedInDto>,
) -> Result<impl IntoResponse, Error> {
    let service = VisitedService::new(VisitedRepository::new(&state.db));
    let visited = service.update(identity.user_id(), visited_id, visited).await?;

    Ok((StatusCode::CREATED, Json(visited)))
}

#[utoipa::path(
    delete,
    path = "/api/visited/{visited_id}",
    tag = VISITED_TAG,
    params(("visited_id" = i32, Path, description = "Visited ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Visited deleted"),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Visited not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_visited(
    State(state): State<AppState>,
    identity: Identity,
    Path(visited_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = VisitedService::new(VisitedRepository::new(&state.db));
    service.delete(identity.user_id(), visited_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/visited/{visited_id}",
    tag = VISITED_TAG,
    params(("visited_id" = i32, Path, description = "Visited ID")),
    responses(
        (status = 200, description = "Visited found", body = VisitedDto),
        (status = 404, description = "Visited not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visited_by_id(
    State(state): State<AppState>,
    Path(visited_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = VisitedService::new(VisitedRepository::new(&state.db));
    let visited = service.get_by_id(visited_id).await?;

    Ok((StatusCode::OK, Json(visited)))
}

#[utoipa::path(
    get,
    path = "/api/visited/all",
    tag = VISITED_TAG,
    responses(
        (status = 200, description = "All records ordered by ID", body = Vec<VisitedDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_visited(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = VisitedService::new(VisitedRepository::new(&state.db));
    let records = service.get_all().await?;

    Ok((StatusCode::OK, Json(records)))
}

#[utoipa::path(
    get,
    path = "/api/visited/country/{country_name}",
    tag = VISITED_TAG,
    params(("country_name" = String, Path, description = "Exact country name")),
    responses(
        (status = 200, description = "Records naming the country", body = Vec<VisitedDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visited_by_country(
    State(state): State<AppState>,
    Path(country_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = VisitedService::new(VisitedRepository::new(&state.db));
    let records = service.get_by_country(&country_name).await?;

    Ok((StatusCode::OK, Json(records)))
}

#[utoipa::path(
    get,
    path = "/api/visited/user/{user_id}",
    tag = VISITED_TAG,
    params(("user_id" = String, Path, description = "Owner user ID")),
    responses(
        (status = 200, description = "Records of the user", body = Vec<VisitedDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visited_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = VisitedService::new(VisitedRepository::new(&state.db));
    let records = service.get_by_user(&user_id).await?;

    Ok((StatusCode::OK, Json(records)))
}
