use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favourite::{FavouriteDto, FavouriteInDto, RankingEntryDto},
    },
    server::{
        controller::util::identity::Identity, data::favourite::FavouriteRepository, error::Error,
        model::app::AppState, service::favourite::FavouriteService,
    },
};

pub static FAVOURITE_TAG: &str = "favourite";

/// Set the caller's favourite country, one per user
#[utoipa::path(
    post,
    path = "/api/favourite/create",
    tag = FAVOURITE_TAG,
    request_body = FavouriteInDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Favourite created", body = FavouriteDto),
        (status = 400, description = "Caller already has a favourite", body = ErrorDto),
        (status = 403, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favourite(
    State(state): State<AppState>,
    identity: Identity,
    Json(favourite): Json<FavouriteInDto>,
) -> Result<impl IntoResponse, Error> {
    let service = FavouriteService::new(FavouriteRepository::new(&state.db));
    let favourite = service.create(identity.user_id(), favourite).await?;

    Ok((StatusCode::CREATED, Json(favourite)))
}

#[utoipa::path(
    put,
    path = "/api/favourite/{favourite_id}",
    tag = FAVOURITE_TAG,
    params(("favourite_id" = i32, Path, description = "Favourite ID")),
    request_body = FavouriteInDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Favourite updated", body = FavouriteDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Favourite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_favourite(
    State(state): State<AppState>,
    identity: Identity,
    Path(favourite_id): Path<i32>,
    Json(favourite): Json<FavouriteInDto>,
) -> Result<impl IntoResponse, Error> {
    let service = FavouriteService::new(FavouriteRepository::new(&state.db));
    let favourite = service.update(identity.user_id(), favourite_id, favourite).await?;

    Ok((StatusCode::CREATED, Json(favourite)))
}

#[utoipa::path(
    delete,
    path = "/api/favourite/{favourite_id}",
    tag = FAVOURITE_TAG,
    params(("favourite_id" = i32, Path, description = "Favourite ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Favourite deleted"),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 404, description = "Favourite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favourite(
    State(state): State<AppState>,
    identity: Identity,
    Path(favourite_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = FavouriteService::new(FavouriteRepository::new(&state.db));
    service.delete(identity.user_id(), favourite_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/favourite/{favourite_id}",
    tag = FAVOURITE_TAG,
    params(("favourite_id" = i32, Path, description = "Favourite ID")),
    responses(
        (status = 200, description = "Favourite found", body = FavouriteDto),
        (status = 404, description = "Favourite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourite_by_id(
    State(state): State<AppState>,
    Path(favourite_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = FavouriteService::new(FavouriteRepository::new(&state.db));
    let favourite = service.get_by_id(favourite_id).await?;

    Ok((StatusCode::OK, Json(favourite)))
}

#[utoipa::path(
    get,
    path = "/api/favourite/all",
    tag = FAVOURITE_TAG,
    responses(
        (status = 200, description = "All records ordered by ID", body = Vec<FavouriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_favourites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = FavouriteService::new(FavouriteRepository::new(&state.db));
    let records = service.get_all().await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Favourite countries by number of users, most popular first
///
/// Countries with equal counts are ordered by name.
#[utoipa::path(
    get,
    path = "/api/favourite/ranking",
    tag = FAVOURITE_TAG,
    responses(
        (status = 200, description = "Favourites ranking", body = Vec<RankingEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourite_ranking(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let service = FavouriteService::new(FavouriteRepository::new(&state.db));
    let ranking = service.get_ranking().await?;

    Ok((StatusCode::OK, Json(ranking)))
}

#[utoipa::path(
    get,
    path = "/api/favourite/country/{country_name}",
    tag = FAVOURITE_TAG,
    params(("country_name" = String, Path, description = "Exact country name")),
    responses(
        (status = 200, description = "Records naming the country", body = Vec<FavouriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourites_by_country(
    State(state): State<AppState>,
    Path(country_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = FavouriteService::new(FavouriteRepository::new(&state.db));
    let records = service.get_by_country(&country_name).await?;

    Ok((StatusCode::OK, Json(records)))
}

#[utoipa::path(
    get,
    path = "/api/favourite/user/{user_id}",
    tag = FAVOURITE_TAG,
    params(("user_id" = String, Path, description = "Owner user ID")),
    responses(
        (status = 200, description = "Records of the user", body = Vec<FavouriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favourites_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = FavouriteService::new(FavouriteRepository::new(&state.db));
    let records = service.get_by_user(&user_id).await?;

    Ok((StatusCode::OK, Json(records)))
}
