//! Health check handler

use axum::{extract::State, Json};

use crate::AppState;
use crate::models::HealthReport;

/// Backend health combined with the IA service's own health document.
/// Never fails: an unreachable IA service yields a degraded report.
pub async fn check(State(state): State<AppState>) -> Json<HealthReport> {
    tracing::info!("Checking IA service health at {}", state.client.base_url());

    match state.client.health().await {
        Ok(ia_health) => {
            tracing::info!("IA service health: {}", ia_health);
            Json(HealthReport::ok(ia_health))
        }
        Err(e) => {
            tracing::error!("IA service unreachable: {}", e);
            Json(HealthReport::unreachable(e.to_string()))
        }
    }
}
