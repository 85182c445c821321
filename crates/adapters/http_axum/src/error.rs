//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use facehub_app::command::CommandError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// API-level failure mapped onto an HTTP response.
pub enum ApiError {
    /// No rendered entity under the requested id.
    UnknownEntity(String),
    /// Command payload failed validation.
    InvalidCommand(CommandError),
}

impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        Self::InvalidCommand(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::UnknownEntity(id) => (StatusCode::NOT_FOUND, format!("no entity '{id}'")),
            Self::InvalidCommand(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
