//! `AuthUser` extractor — reads the identity headers stamped by the
//! authenticating reverse proxy and injects a request context.
//!
//! The service itself does not terminate authentication; it trusts
//! `X-User-Id`, `X-Username` and `X-Role` from the gateway in front of
//! it, which strips any client-supplied copies.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use dailydrop_core::error::AppError;
use dailydrop_service::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = crate::error::ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing X-User-Id header"))?
            .parse::<Uuid>()
            .map_err(|_| AppError::unauthorized("Invalid X-User-Id header"))?;

        let username = parts
            .headers
            .get("x-username")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing X-Username header"))?
            .to_string();

        let is_admin = parts
            .headers
            .get("x-role")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"));

        Ok(AuthUser(RequestContext::new(user_id, username, is_admin)))
    }
}
