//! Shared handler helpers

use axum::body::{to_bytes, Body};
use serde::de::DeserializeOwned;

use crate::error::{ServerError, ServerResult};

/// Size cap for JSON request bodies
pub(crate) const JSON_BODY_LIMIT: usize = 1024 * 1024;

/// Read and parse a JSON request body, mapping failures to validation
/// errors so callers get the standard error envelope
pub(crate) async fn parse_json_body<T: DeserializeOwned>(body: Body) -> ServerResult<T> {
    let bytes = to_bytes(body, JSON_BODY_LIMIT)
        .await
        .map_err(|e| ServerError::Validation(format!("failed to read body: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ServerError::Validation(format!("invalid JSON: {e}")))
}
