//! API error responses
//!
//! Request failures render as `{"detail": "..."}` with a matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Request failure
#[derive(Debug)]
pub enum ApiError {
    /// Resource does not exist (404)
    NotFound(String),
    /// Anything the caller cannot fix (500)
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<hitlog_store::Error> for ApiError {
    fn from(err: hitlog_store::Error) -> Self {
        match err {
            hitlog_store::Error::NotFound(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ApiError::NotFound(format!("{name} file not found"))
            }
            other => {
                error!("Event log failure: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<hitlog_core::Error> for ApiError {
    fn from(err: hitlog_core::Error) -> Self {
        match err {
            hitlog_core::Error::Store(e) => e.into(),
            other => {
                error!("Summary failure: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}
