//! Public media serving.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use dailydrop_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /media/{*key}
///
/// Streams a stored blob. Keys are the same namespaced paths the upload
/// pipeline writes (`submissions/...`, `drops/...`).
pub async fn serve(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    let stream = state.media.read(&key).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_for_key(&key))
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// Content type from the stored key's extension.
fn mime_for_key(key: &str) -> &'static str {
    match key.rsplit('.').next() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_follows_key_extension() {
        assert_eq!(mime_for_key("submissions/d/u.jpg"), "image/jpeg");
        assert_eq!(mime_for_key("drops/x.png"), "image/png");
        assert_eq!(mime_for_key("weird/blob"), "application/octet-stream");
    }
}
