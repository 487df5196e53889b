//! Login endpoint handler

use std::sync::Arc;

use axum::{body::Body, extract::State, Json};
use chrono::Duration;

use crate::api::dto::{LoginRequest, TokenResponse};
use crate::api::handlers::helpers::parse_json_body;
use crate::api::state::AppState;
use crate::error::ServerError;

/// POST /login - exchange admin credentials for a bearer token
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Body,
) -> Result<Json<TokenResponse>, ServerError> {
    let req: LoginRequest = parse_json_body(body).await?;

    if req.username != state.admin.username || req.password != state.admin.password {
        return Err(ServerError::Unauthorized("bad username or password".into()));
    }

    let token = state
        .tokens
        .issue(&req.username, Duration::hours(state.admin.token_ttl_hours))?;

    Ok(Json(TokenResponse::bearer(token)))
}
