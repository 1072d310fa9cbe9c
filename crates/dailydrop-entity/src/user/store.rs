//! Document store contract for user profiles and their grants.

use async_trait::async_trait;
use uuid::Uuid;

use dailydrop_core::result::AppResult;

use super::grant::RewardGrant;
use super::model::{CreateUser, User};

/// Store contract for the `users` collection and its `reward_grants`
/// sub-records.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user profile by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Create the profile if it does not exist yet, returning the stored
    /// row either way. Points start at zero.
    async fn create_if_absent(&self, user: &CreateUser) -> AppResult<User>;

    /// List every user profile (leaderboard includes users with no
    /// approved submissions).
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// List the user's issued voucher grants, newest first.
    async fn list_grants(&self, user_id: Uuid) -> AppResult<Vec<RewardGrant>>;
}
