//! Typed API error for HTTP handlers.
//!
//! Converts storage errors into HTTP responses with a JSON body and status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use objscope_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 408 Request Timeout: the store did not answer before the deadline.
    RequestTimeout(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
    /// 503 Service Unavailable: no store configured.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::RequestTimeout(msg) => (StatusCode::REQUEST_TIMEOUT, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        if err.is_timeout() {
            Self::RequestTimeout("database query timed out".to_owned())
        } else {
            Self::Internal(err.into())
        }
    }
}
