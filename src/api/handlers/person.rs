//! Structural query handlers: person with lineage, children, roots

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::api::dto::{LimitParams, LineageResponse, MemberDto};
use crate::api::state::AppState;
use crate::error::ServerError;
use crate::forest::service::DEFAULT_ROOTS_LIMIT;

/// GET /person/{id} - member record plus root-first ancestor chain
pub async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<LineageResponse>, ServerError> {
    let (person, lineage) = state.service.person_with_lineage(id)?;
    Ok(Json(LineageResponse {
        person: person.into(),
        lineage: lineage.into_iter().map(MemberDto::from).collect(),
    }))
}

/// GET /children/{id} - children of a member, in creation order
pub async fn get_children(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<MemberDto>>, ServerError> {
    let children = state.service.children(id)?;
    Ok(Json(children.into_iter().map(MemberDto::from).collect()))
}

/// GET /roots - members with no parent, in creation order
pub async fn get_roots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<MemberDto>>, ServerError> {
    let limit = params.limit.unwrap_or(DEFAULT_ROOTS_LIMIT);
    let roots = state.service.roots(limit)?;
    Ok(Json(roots.into_iter().map(MemberDto::from).collect()))
}
