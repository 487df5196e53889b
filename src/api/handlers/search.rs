//! Search endpoint handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::dto::{MemberDto, SearchParams};
use crate::api::state::AppState;
use crate::error::ServerError;
use crate::forest::search::DEFAULT_SEARCH_LIMIT;

/// GET /search - ranked name search; a missing or empty query yields an
/// empty result set
pub async fn search_members(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MemberDto>>, ServerError> {
    let query = params.q.unwrap_or_default();
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let hits = state.service.search(&query, limit)?;
    Ok(Json(hits.into_iter().map(MemberDto::from).collect()))
}
