//! Drop administration and the active-drops feed.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;
use dailydrop_core::types::geo::GeoPoint;
use dailydrop_entity::drop::{CreateDrop, DropEvent, DropStore};
use dailydrop_entity::reward::RewardStore;
use dailydrop_storage::media::{MediaStore, extension_for_mime};

use crate::context::RequestContext;

/// Parameters for creating a drop.
#[derive(Debug, Clone)]
pub struct CreateDropParams {
    /// Display name.
    pub name: String,
    /// Catalog reward name, resolved at approval time.
    pub reward_name: String,
    /// Drop location.
    pub location: GeoPoint,
    /// Start of the capture window.
    pub start_time: DateTime<Utc>,
    /// End of the capture window.
    pub end_time: DateTime<Utc>,
}

/// Administration of drops plus the public active feed.
#[derive(Clone)]
pub struct DropService {
    drops: Arc<dyn DropStore>,
    rewards: Arc<dyn RewardStore>,
    media: MediaStore,
}

impl std::fmt::Debug for DropService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropService").finish()
    }
}

impl DropService {
    /// Creates a new drop service.
    pub fn new(
        drops: Arc<dyn DropStore>,
        rewards: Arc<dyn RewardStore>,
        media: MediaStore,
    ) -> Self {
        Self {
            drops,
            rewards,
            media,
        }
    }

    /// Create a drop with its required cover image.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        params: CreateDropParams,
        image: Bytes,
        content_type: Option<String>,
    ) -> AppResult<DropEvent> {
        ctx.require_admin()?;

        if params.name.trim().is_empty() {
            return Err(AppError::validation("Drop name is required"));
        }
        if params.end_time <= params.start_time {
            return Err(AppError::validation(
                "Drop end time must be after its start time",
            ));
        }
        if image.is_empty() {
            return Err(AppError::validation("Drop image is required"));
        }

        let mime = content_type
            .as_deref()
            .ok_or_else(|| AppError::validation("Drop image content type is required"))?;
        let extension = extension_for_mime(mime)
            .ok_or_else(|| AppError::validation(format!("Unsupported image type: {mime}")))?;

        // The reward is resolved again at approval time; a missing name
        // here is suspicious but not fatal.
        if !self.rewards.exists_by_name(&params.reward_name).await? {
            warn!(
                reward = %params.reward_name,
                "Creating drop referencing a reward that is not in the catalog"
            );
        }

        let key = MediaStore::drop_image_key(Uuid::new_v4(), extension);
        self.media.write(&key, image).await?;

        let drop = self
            .drops
            .insert(&CreateDrop {
                name: params.name,
                reward_name: params.reward_name,
                location: params.location,
                start_time: params.start_time,
                end_time: params.end_time,
                image_url: self.media.public_url(&key),
            })
            .await?;

        info!(drop_id = %drop.id, name = %drop.name, "Drop created");
        Ok(drop)
    }

    /// List drops whose capture window contains the current instant.
    pub async fn list_active(&self) -> AppResult<Vec<DropEvent>> {
        self.drops.list_active(Utc::now()).await
    }

    /// List every drop, newest first.
    pub async fn list_all(&self, ctx: &RequestContext) -> AppResult<Vec<DropEvent>> {
        ctx.require_admin()?;
        self.drops.list_all().await
    }

    /// Fetch a single drop.
    pub async fn get(&self, drop_id: Uuid) -> AppResult<DropEvent> {
        self.drops
            .find_by_id(drop_id)
            .await?
            .ok_or_else(|| AppError::not_found("Drop not found"))
    }

    /// Delete a drop. Submissions referencing it are removed with it.
    pub async fn delete(&self, ctx: &RequestContext, drop_id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        self.drops.delete(drop_id).await?;
        info!(drop_id = %drop_id, "Drop deleted");
        Ok(())
    }
}
