//! Reward catalog administration.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;
use dailydrop_entity::reward::{CreateReward, Reward, RewardKind, RewardStore};

use crate::context::RequestContext;

/// Parameters for creating a reward catalog entry.
#[derive(Debug, Clone)]
pub struct CreateRewardParams {
    /// Unique catalog name.
    pub name: String,
    /// Settlement kind label, e.g. "Points" or "Voucher".
    pub kind: String,
    /// Numeric string for points, descriptive string otherwise.
    pub value: String,
}

/// Administration of the reward catalog.
#[derive(Clone)]
pub struct RewardService {
    rewards: Arc<dyn RewardStore>,
}

impl std::fmt::Debug for RewardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewardService").finish()
    }
}

impl RewardService {
    /// Creates a new reward service.
    pub fn new(rewards: Arc<dyn RewardStore>) -> Self {
        Self { rewards }
    }

    /// Create a catalog entry with a unique name.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        params: CreateRewardParams,
    ) -> AppResult<Reward> {
        ctx.require_admin()?;

        let name = params.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Reward name is required"));
        }
        if params.value.trim().is_empty() {
            return Err(AppError::validation("Reward value is required"));
        }

        // Friendly pre-check; the unique index on name is the backstop.
        if self.rewards.exists_by_name(name).await? {
            return Err(AppError::conflict(format!(
                "Reward name \"{name}\" already exists. Please use a unique name."
            )));
        }

        let kind = RewardKind::from_label(&params.kind);
        if kind == RewardKind::Points && params.value.trim().parse::<i64>().is_err() {
            return Err(AppError::validation(format!(
                "Point rewards need a numeric value, got \"{}\"",
                params.value
            )));
        }

        let reward = self
            .rewards
            .insert(&CreateReward {
                name: name.to_string(),
                kind,
                value: params.value,
            })
            .await?;

        info!(reward_id = %reward.id, name = %reward.name, kind = ?reward.kind, "Reward created");
        Ok(reward)
    }

    /// List the full catalog.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Reward>> {
        ctx.require_admin()?;
        self.rewards.list_all().await
    }

    /// Delete a catalog entry.
    pub async fn delete(&self, ctx: &RequestContext, reward_id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        self.rewards.delete(reward_id).await?;
        info!(reward_id = %reward_id, "Reward deleted");
        Ok(())
    }
}
