use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing the admin bearer token")]
    MissingToken,

    /// Bearer token does not match the configured admin token.
    #[error("Request presented an invalid admin token")]
    InvalidToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized with the same client-facing message so the
/// response does not reveal whether a token was recognised. Details are logged at
/// debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
