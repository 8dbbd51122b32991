use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::Error};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("Continent ID {0} does not exist")]
    ContinentNotFound(i32),
    /// Update payload names a continent that does not exist
    #[error("Continent ID {0} in update does not exist")]
    InvalidContinent(i32),
    #[error("Invalid value for field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl EntityError {
    /// Translates unique & foreign key violations reported by the store into entity errors
    ///
    /// Any other database error is passed through unchanged.
    pub fn from_constraint_violation(
        err: DbErr,
        on_unique: impl FnOnce() -> EntityError,
        on_foreign_key: impl FnOnce() -> EntityError,
    ) -> Error {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => on_unique().into(),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => on_foreign_key().into(),
            _ => err.into(),
        }
    }
}

impl IntoResponse for EntityError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::NotFound(kind) => (StatusCode::NOT_FOUND, format!("{} not found", kind)),
            Self::Conflict(message) => (StatusCode::BAD_REQUEST, message),
            Self::ContinentNotFound(_) => {
                (StatusCode::NOT_FOUND, "Continent not exist".to_string())
            }
            Self::InvalidContinent(_) => {
                (StatusCode::BAD_REQUEST, "Continent not exist".to_string())
            }
            err @ Self::InvalidField { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
