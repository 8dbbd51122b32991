//! Error types for the country API server.
//!
//! Domain errors are split by concern (authorization, entity lookups & constraints,
//! configuration). All errors use `thiserror` and implement `IntoResponse` so handlers can
//! return them directly with `?`.

pub mod auth;
pub mod config;
pub mod entity;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, entity::EntityError},
};

/// Main error type for the server application.
///
/// Aggregates the domain-specific error types and external library errors so the `?`
/// operator works across repositories, services and controllers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Caller has no verified identity or does not own the target record.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Entity not found, duplicate, dangling continent reference or invalid field.
    #[error(transparent)]
    EntityError(#[from] EntityError),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Duplicates and invalid fields
/// - 403 Forbidden - Missing credentials or caller is not the owner
/// - 404 Not Found - Missing records and unknown continent references
/// - 500 Internal Server Error - Everything else (logged, details not exposed)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::EntityError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
