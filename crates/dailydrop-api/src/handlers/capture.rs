//! Capture attempt handler.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use bytes::Bytes;
use uuid::Uuid;

use dailydrop_core::error::AppError;
use dailydrop_core::types::geo::GeoPoint;
use dailydrop_entity::submission::Submission;
use dailydrop_service::CaptureRequest;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/drops/{id}/capture
///
/// Multipart form: `photo` (image file), plus optional `lat` and `lng`
/// text fields with the client's reported position. Omitting the
/// position denies the attempt.
pub async fn capture_drop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(drop_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Submission>>, ApiError> {
    let mut photo: Option<Bytes> = None;
    let mut content_type: Option<String> = None;
    let mut lat: Option<f64> = None;
    let mut lng: Option<f64> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("photo") => {
                content_type = field.content_type().map(String::from);
                photo = Some(field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Failed to read photo field: {e}"))
                })?);
            }
            Some("lat") => lat = Some(parse_coordinate(field, "lat").await?),
            Some("lng") => lng = Some(parse_coordinate(field, "lng").await?),
            _ => {}
        }
    }

    let photo = photo.ok_or_else(|| AppError::validation("Missing photo field"))?;
    let position = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng).map_err(ApiError::from)?),
        _ => None,
    };

    let submission = state
        .capture_service
        .capture(
            auth.context(),
            CaptureRequest {
                drop_id,
                position,
                content_type,
                photo,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(submission)))
}

async fn parse_coordinate(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<f64, ApiError> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read {name} field: {e}")))?;
    text.trim()
        .parse::<f64>()
        .map_err(|_| AppError::validation(format!("Invalid {name} value: {text}")).into())
}
