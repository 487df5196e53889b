//! Health endpoint handler

use axum::Json;

use crate::api::dto::HealthResponse;

/// GET /health - liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
