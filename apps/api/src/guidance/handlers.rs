//! Axum route handlers for the Guidance API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::guidance::models::{CareerInput, CareerOutput};
use crate::guidance::validation::validate_career_input;
use crate::state::AppState;

/// POST /generate
///
/// Validates the profile, then asks the model for guidance. Validation runs
/// first so a rejected request never costs a model call. Body rejections are
/// routed through `AppError` to keep the `{"detail"}` shape.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<CareerInput>, JsonRejection>,
) -> Result<Json<CareerOutput>, AppError> {
    let Json(request) = payload?;
    info!("Received request for role: {}", request.role);

    validate_career_input(&request)?;

    let output = state.generator.generate(&request).await?;

    Ok(Json(output))
}
