//! Drop administration and the active-drops feed.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use dailydrop_core::error::AppError;
use dailydrop_core::types::geo::GeoPoint;
use dailydrop_entity::drop::DropEvent;
use dailydrop_service::CreateDropParams;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/drops/active
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DropEvent>>>, ApiError> {
    let drops = state.drop_service.list_active().await?;
    Ok(Json(ApiResponse::ok(drops)))
}

/// GET /api/drops (admin)
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<DropEvent>>>, ApiError> {
    let drops = state.drop_service.list_all(auth.context()).await?;
    Ok(Json(ApiResponse::ok(drops)))
}

/// GET /api/drops/{id}
pub async fn get_drop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DropEvent>>, ApiError> {
    let drop = state.drop_service.get(id).await?;
    Ok(Json(ApiResponse::ok(drop)))
}

/// POST /api/drops (admin)
///
/// Multipart form: `name`, `reward_name`, `lat`, `lng`, `start_time`,
/// `end_time` (RFC 3339) text fields plus a required `image` file.
pub async fn create_drop(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<DropEvent>>), ApiError> {
    let mut name: Option<String> = None;
    let mut reward_name: Option<String> = None;
    let mut lat: Option<f64> = None;
    let mut lng: Option<f64> = None;
    let mut start_time: Option<DateTime<Utc>> = None;
    let mut end_time: Option<DateTime<Utc>> = None;
    let mut image: Option<Bytes> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("name") => name = Some(text(field, "name").await?),
            Some("reward_name") => reward_name = Some(text(field, "reward_name").await?),
            Some("lat") => lat = Some(number(field, "lat").await?),
            Some("lng") => lng = Some(number(field, "lng").await?),
            Some("start_time") => start_time = Some(timestamp(field, "start_time").await?),
            Some("end_time") => end_time = Some(timestamp(field, "end_time").await?),
            Some("image") => {
                content_type = field.content_type().map(String::from);
                image = Some(field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Failed to read image field: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let params = CreateDropParams {
        name: required(name, "name")?,
        reward_name: required(reward_name, "reward_name")?,
        location: GeoPoint::new(required(lat, "lat")?, required(lng, "lng")?)
            .map_err(ApiError::from)?,
        start_time: required(start_time, "start_time")?,
        end_time: required(end_time, "end_time")?,
    };
    let image = required(image, "image")?;

    let drop = state
        .drop_service
        .create(auth.context(), params, image, content_type)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(drop))))
}

/// DELETE /api/drops/{id} (admin)
pub async fn delete_drop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.drop_service.delete(auth.context(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| AppError::validation(format!("Missing {name} field")).into())
}

async fn text(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Failed to read {name} field: {e}")).into())
}

async fn number(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<f64, ApiError> {
    let value = text(field, name).await?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::validation(format!("Invalid {name} value: {value}")).into())
}

async fn timestamp(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<DateTime<Utc>, ApiError> {
    let value = text(field, name).await?;
    value
        .trim()
        .parse::<DateTime<Utc>>()
        .map_err(|_| {
            AppError::validation(format!("Invalid {name} timestamp: {value}")).into()
        })
}
