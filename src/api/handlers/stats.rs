//! Statistics endpoint handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::error::ServerError;
use crate::forest::TreeStats;

/// GET /stats - population summary, recomputed per call
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TreeStats>, ServerError> {
    Ok(Json(state.service.stats()?))
}
