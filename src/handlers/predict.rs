//! Prediction handlers

use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde_json::Value;
use validator::Validate;

use crate::{AppState, AppResult, AppError};
use crate::models::{AccidentFeatures, IaFeatures, PredictionResult};

/// Forward an accident description to the IA service
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let Json(raw) = payload.map_err(|e| AppError::InvalidPayload(e.body_text()))?;
    let features: AccidentFeatures = serde_json::from_value(raw)?;

    let result = forward(&state, features).await?;
    Ok(Json(result))
}

/// Run the prediction path with a fixed sample payload
pub async fn test_prediction(
    State(state): State<AppState>,
) -> AppResult<Json<PredictionResult>> {
    tracing::info!("Test prediction started");

    let result = forward(&state, AccidentFeatures::sample()).await?;

    tracing::info!("Test prediction succeeded: {:?}", result);
    Ok(Json(result))
}

async fn forward(state: &AppState, features: AccidentFeatures) -> AppResult<PredictionResult> {
    features.validate()?;

    let ia_features = IaFeatures::from(features);
    tracing::debug!("Received accident data: {:?}", ia_features);

    let result = state.client.predict(&ia_features).await?;
    tracing::info!(
        "IA prediction: {} (confidence {:.3})",
        result.prediction,
        result.confidence
    );

    Ok(result)
}
