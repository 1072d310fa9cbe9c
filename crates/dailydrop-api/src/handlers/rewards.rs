//! Reward catalog handlers (admin).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use dailydrop_core::error::AppError;
use dailydrop_entity::reward::Reward;
use dailydrop_service::CreateRewardParams;

use crate::dto::request::CreateRewardRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/rewards
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Reward>>>, ApiError> {
    let rewards = state.reward_service.list(auth.context()).await?;
    Ok(Json(ApiResponse::ok(rewards)))
}

/// POST /api/rewards
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateRewardRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Reward>>), ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let reward = state
        .reward_service
        .create(
            auth.context(),
            CreateRewardParams {
                name: body.name,
                kind: body.kind,
                value: body.value,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(reward))))
}

/// DELETE /api/rewards/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.reward_service.delete(auth.context(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
