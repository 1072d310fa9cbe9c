//! Document store contract for submissions, including settlement.

use async_trait::async_trait;
use uuid::Uuid;

use dailydrop_core::result::AppResult;

use super::model::{CreateSubmission, Submission};
use crate::user::CreateRewardGrant;

/// Store contract for the `submissions` ledger.
///
/// Settlement operations pair the pending→terminal status flip with the
/// reward effect in one atomic unit and return `false` when the
/// submission was not in `pending` state, so terminal states can never
/// transition again regardless of concurrent reviewers.
#[async_trait]
pub trait SubmissionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new submission in `pending` state with a server-assigned
    /// timestamp. Fails with Conflict when a submission for the same
    /// (user, drop) pair already exists.
    async fn insert(&self, submission: &CreateSubmission) -> AppResult<Submission>;

    /// Find a submission by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Submission>>;

    /// Existence-check query for the duplicate guard: at most one record
    /// for the (user, drop) pair, regardless of status.
    async fn find_by_user_and_drop(
        &self,
        user_id: Uuid,
        drop_id: Uuid,
    ) -> AppResult<Option<Submission>>;

    /// List pending submissions for a drop, oldest first.
    async fn list_pending_for_drop(&self, drop_id: Uuid) -> AppResult<Vec<Submission>>;

    /// Count pending submissions for a drop.
    async fn count_pending_for_drop(&self, drop_id: Uuid) -> AppResult<i64>;

    /// Count approved submissions per user across all drops.
    async fn count_approved_per_user(&self) -> AppResult<Vec<(Uuid, i64)>>;

    /// Approve a pending submission and atomically add `points` to the
    /// user's counter. Returns `false` if the submission was not pending.
    async fn approve_with_points(
        &self,
        submission_id: Uuid,
        user_id: Uuid,
        points: i64,
    ) -> AppResult<bool>;

    /// Approve a pending submission and atomically append a voucher grant
    /// under the user. Returns `false` if the submission was not pending.
    async fn approve_with_grant(
        &self,
        submission_id: Uuid,
        user_id: Uuid,
        grant: &CreateRewardGrant,
    ) -> AppResult<bool>;

    /// Reject a pending submission. No reward side effects. Returns
    /// `false` if the submission was not pending.
    async fn reject(&self, submission_id: Uuid) -> AppResult<bool>;
}
