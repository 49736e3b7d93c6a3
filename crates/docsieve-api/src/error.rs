//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//!
//! A failed validation renders the failure payload clients bind against:
//!
//! ```json
//! {"message": "validation failed", "errors": {"email": ["email is required"]}}
//! ```
//!
//! Every other variant renders the structured [`ErrorBody`]. Internal error
//! details, including schema construction errors, are logged and never
//! returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docsieve_core::{CoreError, MessageRecord};
use docsieve_schema::SchemaError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level message of the validation failure payload.
pub const VALIDATION_FAILED: &str = "validation failed";

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Body returned when a request fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub message: String,
    /// Failure messages keyed by dotted field path.
    pub errors: MessageRecord,
}

impl ValidationErrorBody {
    /// Wrap a failing record.
    pub fn new(errors: MessageRecord) -> Self {
        Self {
            message: VALIDATION_FAILED.to_string(),
            errors,
        }
    }
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request was well-formed but failed its schema (400).
    #[error("validation failed on {} field(s)", .0.len())]
    ValidationFailed(MessageRecord),

    /// Request body or query could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// A schema failed to build (500). Always a programming error.
    #[error("schema construction failed: {0}")]
    Schema(#[from] SchemaError),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::ValidationFailed(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Schema(_) | Self::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            Self::ValidationFailed(errors) => {
                tracing::debug!(fields = errors.len(), "request failed validation");
                return (status, Json(ValidationErrorBody::new(errors))).into_response();
            }
            Self::Schema(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// A document that is not an object is the client's fault; a struct that
/// cannot be serialized is ours.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotAnObject { .. } => Self::BadRequest(err.to_string()),
            CoreError::Serialization(_) => Self::Internal(err.to_string()),
        }
    }
}
