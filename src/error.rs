use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors returned to API callers.
///
/// Detail stays in the server log; callers only see a terse message
/// with the mapped status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Failed to create meeting")]
    Provider,
    #[error("Failed to save meeting record")]
    Storage,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Provider | ApiError::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
