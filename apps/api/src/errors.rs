use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::guidance::generator::GenerationError;
use crate::guidance::validation::ValidationError;

/// Detail returned for every server-side failure. The cause is only logged.
pub const GENERATION_FAILED_DETAIL: &str = "Failed to generate career guidance";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Invalid request body: {0}")]
    Payload(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Generation(e) => {
                tracing::error!("Agent error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATION_FAILED_DETAIL.to_string(),
                )
            }
            AppError::Payload(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
