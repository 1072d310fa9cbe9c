//! Submission review and reward settlement.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;
use dailydrop_entity::drop::{DropEvent, DropStore};
use dailydrop_entity::reward::{Reward, RewardKind, RewardStore};
use dailydrop_entity::submission::{Submission, SubmissionStore};
use dailydrop_entity::user::{CreateRewardGrant, UserStore};

use crate::context::RequestContext;

/// A pending submission enriched with the submitter's display name.
#[derive(Debug, Clone, Serialize)]
pub struct PendingSubmission {
    /// The submission record.
    #[serde(flatten)]
    pub submission: Submission,
    /// Display name of the submitting user, or `"unknown"` if the
    /// profile row is missing.
    pub username: String,
}

/// Per-drop review summary: the drop, whether it is currently active,
/// and how many submissions await review.
#[derive(Debug, Clone, Serialize)]
pub struct DropReviewSummary {
    /// The drop record.
    #[serde(flatten)]
    pub drop: DropEvent,
    /// Whether the drop's capture window contains the current time.
    pub active: bool,
    /// Number of pending submissions.
    pub pending_count: i64,
}

/// Administrator-facing review of pending submissions.
///
/// Settlement resolves the drop's reward by name at approval time and
/// applies exactly one effect: a point credit or a voucher grant. The
/// status flip and the effect are one atomic store operation, so a
/// submission can never be settled twice.
#[derive(Clone)]
pub struct ReviewService {
    drops: Arc<dyn DropStore>,
    submissions: Arc<dyn SubmissionStore>,
    rewards: Arc<dyn RewardStore>,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for ReviewService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewService").finish()
    }
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        drops: Arc<dyn DropStore>,
        submissions: Arc<dyn SubmissionStore>,
        rewards: Arc<dyn RewardStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            drops,
            submissions,
            rewards,
            users,
        }
    }

    /// All drops with their review state: active flag and pending
    /// submission count, active drops first.
    pub async fn overview(&self, ctx: &RequestContext) -> AppResult<Vec<DropReviewSummary>> {
        ctx.require_admin()?;

        let now = Utc::now();
        let drops = self.drops.list_all().await?;

        let mut summaries = Vec::with_capacity(drops.len());
        for drop in drops {
            let pending_count = self.submissions.count_pending_for_drop(drop.id).await?;
            let active = drop.is_active(now);
            summaries.push(DropReviewSummary {
                drop,
                active,
                pending_count,
            });
        }

        summaries.sort_by(|a, b| {
            b.active
                .cmp(&a.active)
                .then(b.drop.start_time.cmp(&a.drop.start_time))
        });
        Ok(summaries)
    }

    /// List pending submissions for a drop, oldest first, with the
    /// submitter's username resolved for the review screen.
    pub async fn list_pending(
        &self,
        ctx: &RequestContext,
        drop_id: Uuid,
    ) -> AppResult<Vec<PendingSubmission>> {
        ctx.require_admin()?;

        let submissions = self.submissions.list_pending_for_drop(drop_id).await?;

        let mut usernames: HashMap<Uuid, String> = HashMap::new();
        let mut enriched = Vec::with_capacity(submissions.len());
        for submission in submissions {
            let username = match usernames.get(&submission.user_id) {
                Some(name) => name.clone(),
                None => {
                    let name = self
                        .users
                        .find_by_id(submission.user_id)
                        .await?
                        .map(|u| u.username)
                        .unwrap_or_else(|| "unknown".to_string());
                    usernames.insert(submission.user_id, name.clone());
                    name
                }
            };
            enriched.push(PendingSubmission {
                submission,
                username,
            });
        }
        Ok(enriched)
    }

    /// Count pending submissions for a drop.
    pub async fn count_pending(&self, ctx: &RequestContext, drop_id: Uuid) -> AppResult<i64> {
        ctx.require_admin()?;
        self.submissions.count_pending_for_drop(drop_id).await
    }

    /// Approve a pending submission and settle its reward.
    ///
    /// With `double_points` the base point value is multiplied by two
    /// before the credit; the variant is refused for non-points rewards.
    pub async fn approve(
        &self,
        ctx: &RequestContext,
        submission_id: Uuid,
        double_points: bool,
    ) -> AppResult<Submission> {
        ctx.require_admin()?;

        let submission = self.load_pending(submission_id).await?;
        let reward = self.resolve_reward(submission.drop_id).await?;

        let settled = match reward.kind {
            RewardKind::Points => {
                let base = reward.point_value()?;
                let points = if double_points { base * 2 } else { base };
                let settled = self
                    .submissions
                    .approve_with_points(submission_id, submission.user_id, points)
                    .await?;
                if settled {
                    info!(
                        submission_id = %submission_id,
                        user_id = %submission.user_id,
                        points,
                        double_points,
                        "Submission approved with point credit"
                    );
                }
                settled
            }
            RewardKind::Voucher => {
                if double_points {
                    return Err(AppError::validation(
                        "Double points is only available for point rewards",
                    ));
                }
                let grant =
                    CreateRewardGrant::from_reward(&reward, submission.drop_id, Utc::now());
                let settled = self
                    .submissions
                    .approve_with_grant(submission_id, submission.user_id, &grant)
                    .await?;
                if settled {
                    info!(
                        submission_id = %submission_id,
                        user_id = %submission.user_id,
                        reward = %reward.name,
                        "Submission approved with voucher grant"
                    );
                }
                settled
            }
        };

        if !settled {
            return Err(AppError::conflict("Submission is no longer pending"));
        }

        self.reload(submission_id).await
    }

    /// Reject a pending submission. No reward side effects.
    pub async fn reject(
        &self,
        ctx: &RequestContext,
        submission_id: Uuid,
    ) -> AppResult<Submission> {
        ctx.require_admin()?;

        // Load first so a missing id reports NotFound rather than Conflict.
        self.load_pending(submission_id).await?;

        if !self.submissions.reject(submission_id).await? {
            return Err(AppError::conflict("Submission is no longer pending"));
        }

        info!(submission_id = %submission_id, "Submission rejected");
        self.reload(submission_id).await
    }

    async fn load_pending(&self, submission_id: Uuid) -> AppResult<Submission> {
        let submission = self
            .submissions
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| AppError::not_found("Submission not found"))?;

        if submission.status.is_terminal() {
            return Err(AppError::conflict("Submission has already been settled"));
        }
        Ok(submission)
    }

    /// Resolve the drop's reward name to exactly one catalog entry.
    ///
    /// Zero or multiple matches abort settlement and leave the submission
    /// pending.
    async fn resolve_reward(&self, drop_id: Uuid) -> AppResult<Reward> {
        let drop = self
            .drops
            .find_by_id(drop_id)
            .await?
            .ok_or_else(|| AppError::validation("Originating drop no longer exists"))?;

        let mut matches = self.rewards.find_by_name(&drop.reward_name).await?;
        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(AppError::validation(format!(
                "Reward \"{}\" was not found in the catalog",
                drop.reward_name
            ))),
            n => Err(AppError::validation(format!(
                "Reward \"{}\" is ambiguous: {n} catalog entries match",
                drop.reward_name
            ))),
        }
    }

    async fn reload(&self, submission_id: Uuid) -> AppResult<Submission> {
        self.submissions
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| AppError::internal("Submission vanished during settlement"))
    }
}
