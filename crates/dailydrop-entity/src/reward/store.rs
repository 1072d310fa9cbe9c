//! Document store contract for the reward catalog.

use async_trait::async_trait;
use uuid::Uuid;

use dailydrop_core::result::AppResult;

use super::model::{CreateReward, Reward};

/// Store contract for the `rewards` catalog.
#[async_trait]
pub trait RewardStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new reward with a generated id, returning the stored row.
    async fn insert(&self, reward: &CreateReward) -> AppResult<Reward>;

    /// Find all catalog entries carrying the given name.
    ///
    /// Returns a vector rather than an option because name uniqueness is
    /// only best-effort at the application level; settlement treats zero
    /// or multiple matches as a hard error.
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Reward>>;

    /// Check whether any catalog entry carries the given name.
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;

    /// List all rewards sorted by name.
    async fn list_all(&self) -> AppResult<Vec<Reward>>;

    /// Delete a reward by id.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}
