//! Document store contract for drops.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use dailydrop_core::result::AppResult;

use super::model::{CreateDrop, DropEvent};

/// Store contract for the `drops` collection.
#[async_trait]
pub trait DropStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new drop with a generated id, returning the stored row.
    async fn insert(&self, drop: &CreateDrop) -> AppResult<DropEvent>;

    /// Find a drop by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DropEvent>>;

    /// List drops whose capture window contains `now`.
    async fn list_active(&self, now: DateTime<Utc>) -> AppResult<Vec<DropEvent>>;

    /// List all drops, newest first.
    async fn list_all(&self) -> AppResult<Vec<DropEvent>>;

    /// Delete a drop by id.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}
