//! Member CRUD handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{
    CreateMemberRequest, DeleteResponse, LimitParams, MemberDto, UpdateMemberRequest,
};
use crate::api::handlers::helpers::parse_json_body;
use crate::api::state::AppState;
use crate::error::ServerError;
use crate::forest::service::DEFAULT_LIST_LIMIT;

/// GET /members - listing view, ordered by name
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<MemberDto>>, ServerError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let members = state.service.list_members(limit)?;
    Ok(Json(members.into_iter().map(MemberDto::from).collect()))
}

/// POST /members - create a member (open to self-registration)
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    body: Body,
) -> Result<(StatusCode, Json<MemberDto>), ServerError> {
    let req: CreateMemberRequest = parse_json_body(body).await?;
    let member = state.service.create(req.into())?;
    Ok((StatusCode::CREATED, Json(member.into())))
}

/// PUT /members/{id} - partial update (admin only)
pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Body,
) -> Result<Json<MemberDto>, ServerError> {
    let req: UpdateMemberRequest = parse_json_body(body).await?;
    let member = state.service.update(id, req.into())?;
    Ok(Json(member.into()))
}

/// DELETE /members/{id} - remove a childless member (admin only)
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ServerError> {
    state.service.delete(id)?;
    Ok(Json(DeleteResponse {
        detail: "member deleted".to_string(),
        id,
    }))
}
