//! Request context carrying the authenticated user identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username from the identity provider.
    pub username: String,
    /// Whether the user holds the administrator role.
    pub is_admin: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: String, is_admin: bool) -> Self {
        Self {
            user_id,
            username,
            is_admin,
            request_time: Utc::now(),
        }
    }

    /// Reject non-administrator callers.
    pub fn require_admin(&self) -> AppResult<()> {
        if !self.is_admin {
            return Err(AppError::forbidden("Administrator role required"));
        }
        Ok(())
    }
}
