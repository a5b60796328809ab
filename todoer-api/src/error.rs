/// Error handling for the API server
///
/// Handlers return `ApiResult<T>`; the error side converts to an HTTP
/// response with a JSON body.
///
/// | Variant | Status | `error` code |
/// |---|---|---|
/// | `MalformedBody` | 500 | `malformed_body` |
/// | `InternalError` | 500 | `internal_error` |
///
/// A body that cannot be read or decoded answers 500 rather than 400; existing
/// clients depend on that status. Storage failures are answered per request
/// and never bring the process down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use todoer_shared::repository::RepositoryError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Request body unreadable or not the expected JSON (500)
    MalformedBody(String),

    /// Storage or other server-side failure (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "malformed_body")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedBody(msg) => write!(f, "Malformed body: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::MalformedBody(msg) => {
                tracing::debug!("Rejected request body: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_body", msg)
            }
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
