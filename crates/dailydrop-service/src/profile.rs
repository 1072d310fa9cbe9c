//! User profile lookup and first-login provisioning.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;
use dailydrop_entity::user::{CreateUser, RewardGrant, User, UserStore};

use crate::context::RequestContext;

/// A user profile with their issued voucher grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// The profile record.
    pub user: User,
    /// Issued voucher grants, newest first.
    pub grants: Vec<RewardGrant>,
}

/// User profile operations.
#[derive(Clone)]
pub struct ProfileService {
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService").finish()
    }
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Ensure a profile row exists for the authenticated identity and
    /// return it. Idempotent across logins.
    pub async fn provision(&self, ctx: &RequestContext, email: Option<String>) -> AppResult<User> {
        let user = self
            .users
            .create_if_absent(&CreateUser {
                id: ctx.user_id,
                username: ctx.username.clone(),
                email,
            })
            .await?;
        debug!(user_id = %user.id, "Profile provisioned");
        Ok(user)
    }

    /// The caller's profile with their voucher grants.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<UserProfile> {
        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;
        let grants = self.users.list_grants(ctx.user_id).await?;
        Ok(UserProfile { user, grants })
    }
}
