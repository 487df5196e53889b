//! Bearer token authentication middleware

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::error::ServerError;

/// Admin authentication middleware - validates signed bearer tokens
///
/// Applied to the mutating routes (edit, delete). Returns 401 if the token
/// is missing, malformed, expired, or not signed by this server.
pub async fn admin_auth(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ServerError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| ServerError::Unauthorized("missing bearer token".into()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ServerError::Unauthorized("invalid authorization header".into()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ServerError::Unauthorized("invalid authorization header".into()))?;

    state.tokens.verify(token)?;

    Ok(next.run(req).await)
}
