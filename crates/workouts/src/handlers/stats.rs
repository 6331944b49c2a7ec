//! Health check handler.

use axum::{Extension, response::Json};

use crate::types::HealthResponse;

use super::SharedStore;

/// Health check endpoint. Also reports how many workouts are loaded.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Health check passed", body = HealthResponse)
    )
)]
pub async fn health_check(Extension(store): Extension<SharedStore>) -> Json<HealthResponse> {
    let workouts = store.lock().await.len();
    Json(HealthResponse {
        status: "ok".to_string(),
        workouts,
    })
}
