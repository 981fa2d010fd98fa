use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::responses::ErrorResponse;

#[derive(Debug, Error, PartialEq)]
pub enum CoachError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A form entry with a missing field; the message is shown to the user as-is.
    #[error("{0}")]
    InvalidField(String),
}

pub type CoachResult<T> = std::result::Result<T, CoachError>;

impl IntoResponse for CoachError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request.rejected");

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
