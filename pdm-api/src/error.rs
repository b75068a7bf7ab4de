//! Error types for pdm-api

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type with HTTP status mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Generic internal error (500)
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// Engine error from pdm-common
    #[error(transparent)]
    Common(#[from] pdm_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use pdm_common::Error;

        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Common(Error::Fetch(msg)) => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_FETCH_FAILED", msg)
            }
            ApiError::Common(Error::Sheet(msg)) => {
                (StatusCode::BAD_GATEWAY, "SHEET_MALFORMED", msg)
            }
            ApiError::Common(Error::Config(msg)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "NOT_CONFIGURED", msg)
            }
            ApiError::Other(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
