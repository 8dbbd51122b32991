use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Request has no verified user identity")]
    MissingIdentity,
    #[error("User {user_id} does not own {kind} ID {record_id}")]
    NotOwner {
        user_id: String,
        kind: &'static str,
        record_id: i32,
    },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
