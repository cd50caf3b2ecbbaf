//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use memo_core::MemoError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// API error type.
///
/// Client input problems become 400s. Everything coming out of the store,
/// including a missing memo, is a storage failure and becomes a 500 unless
/// the server was configured to report missing memos as 404.
#[derive(Debug, Error)]
#[error("[{status}] {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn invalid_id() -> Self {
        Self::bad_request("Invalid ID")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a store error, reporting `NotFound` with `not_found_status`.
    pub fn from_store(err: MemoError, not_found_status: StatusCode) -> Self {
        if err.is_not_found() {
            Self::new(not_found_status, err.to_string())
        } else {
            Self::from(err)
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            warn!(status = %self.status.as_u16(), error = %self.message, "Request failed");
        }

        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

impl From<MemoError> for ApiError {
    fn from(err: MemoError) -> Self {
        ApiError::internal(err.to_string())
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
