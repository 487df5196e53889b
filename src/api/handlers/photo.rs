//! Photo upload handler

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::api::dto::MemberDto;
use crate::api::state::AppState;
use crate::error::ServerError;

/// Size cap for uploaded photos
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// POST /members/{id}/photo - upload or replace a member's photo
///
/// Accepts the raw image body; the content type picks the stored
/// extension. The previous photo, if any, is removed on replace.
pub async fn upload_photo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<MemberDto>, ServerError> {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .split(';')
        .next()
        .unwrap_or("")
        .trim();

    let ext = extension_for(content_type)
        .ok_or_else(|| ServerError::UnsupportedContentType(content_type.to_string()))?;

    let member = state.service.member(id)?;

    let bytes = to_bytes(body, MAX_PHOTO_BYTES).await.map_err(|_| {
        ServerError::PhotoTooLarge {
            limit_bytes: MAX_PHOTO_BYTES,
        }
    })?;
    if bytes.is_empty() {
        return Err(ServerError::Validation("empty photo body".into()));
    }

    if let Some(old) = &member.image_url {
        state.photos.remove(old)?;
    }

    let reference = state.photos.store(id, ext, &bytes)?;
    let updated = state.service.set_image(id, Some(&reference))?;

    Ok(Json(updated.into()))
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some(".jpg"),
        "image/png" => Some(".png"),
        "image/webp" => Some(".webp"),
        "image/gif" => Some(".gif"),
        _ => None,
    }
}
