//! Error types for the API server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pathways_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Message returned whenever a turn's content could not be generated.
pub const GENERATION_FAILURE_MESSAGE: &str =
    "An error occurred while generating your answer. Please try again later.";

/// Message returned for unexpected failures.
pub const INTERNAL_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The outbound HTTP client could not be built.
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
///
/// Only validation messages reach the client verbatim; collaborator failures
/// are reduced to a fixed message.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            DomainError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "validation_error", self.0.to_string())
            }
            err if err.is_generation_failure() => (
                StatusCode::BAD_GATEWAY,
                "generation_failed",
                GENERATION_FAILURE_MESSAGE.to_owned(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                INTERNAL_FAILURE_MESSAGE.to_owned(),
            ),
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}
