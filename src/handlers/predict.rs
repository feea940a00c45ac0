//! Prediction submission handler

use axum::{extract::State, Json};

use crate::{AppError, AppResult, AppState};
use crate::models::{DisplayResult, PredictionForm};

/// Submit the form to the prediction endpoint.
///
/// Endpoint and transport failures still answer 200; the outcome is in the
/// body for the result region. Only rejected input maps to an error status.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<PredictionForm>,
) -> AppResult<Json<DisplayResult>> {
    match state.client.submit_prediction(&form).await {
        DisplayResult::Rejected { fields } => Err(AppError::InvalidInput(fields)),
        result => Ok(Json(result)),
    }
}
