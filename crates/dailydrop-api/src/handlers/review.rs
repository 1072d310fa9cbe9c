//! Submission review handlers (admin).

use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use dailydrop_entity::submission::Submission;
use dailydrop_service::{DropReviewSummary, PendingSubmission};

use crate::dto::request::ApproveRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/review/overview
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<DropReviewSummary>>>, ApiError> {
    let summaries = state.review_service.overview(auth.context()).await?;
    Ok(Json(ApiResponse::ok(summaries)))
}

/// GET /api/drops/{id}/submissions
pub async fn list_pending(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(drop_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PendingSubmission>>>, ApiError> {
    let pending = state
        .review_service
        .list_pending(auth.context(), drop_id)
        .await?;
    Ok(Json(ApiResponse::ok(pending)))
}

/// GET /api/drops/{id}/submissions/count
pub async fn count_pending(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(drop_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let count = state
        .review_service
        .count_pending(auth.context(), drop_id)
        .await?;
    Ok(Json(json!({ "success": true, "data": { "pending": count } })))
}

/// POST /api/submissions/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(submission_id): Path<Uuid>,
    body: Option<Json<ApproveRequest>>,
) -> Result<Json<ApiResponse<Submission>>, ApiError> {
    let double_points = body.map(|Json(b)| b.double_points).unwrap_or(false);
    let submission = state
        .review_service
        .approve(auth.context(), submission_id, double_points)
        .await?;
    Ok(Json(ApiResponse::ok(submission)))
}

/// POST /api/submissions/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(submission_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Submission>>, ApiError> {
    let submission = state
        .review_service
        .reject(auth.context(), submission_id)
        .await?;
    Ok(Json(ApiResponse::ok(submission)))
}
