//! Leaderboard handler.

use axum::Json;
use axum::extract::State;

use dailydrop_service::LeaderboardEntry;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/leaderboard
pub async fn standings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LeaderboardEntry>>>, ApiError> {
    let standings = state.leaderboard_service.standings().await?;
    Ok(Json(ApiResponse::ok(standings)))
}
