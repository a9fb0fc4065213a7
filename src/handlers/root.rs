//! Root handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

pub async fn info() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Backend Accidents - API",
    })
}
