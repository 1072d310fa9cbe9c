//! User profile handlers.

use axum::Json;
use axum::extract::State;

use dailydrop_entity::user::User;
use dailydrop_service::UserProfile;

use crate::dto::request::ProvisionRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/users/me
///
/// Idempotent first-login provisioning of the profile row.
pub async fn provision(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<Json<ProvisionRequest>>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let email = body.and_then(|Json(b)| b.email);
    let user = state
        .profile_service
        .provision(auth.context(), email)
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state.profile_service.me(auth.context()).await?;
    Ok(Json(ApiResponse::ok(profile)))
}
