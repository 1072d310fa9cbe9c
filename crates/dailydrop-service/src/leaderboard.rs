//! Leaderboard standings by approved captures.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dailydrop_core::result::AppResult;
use dailydrop_entity::submission::SubmissionStore;
use dailydrop_entity::user::UserStore;

/// One row of the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// The ranked user.
    pub user_id: Uuid,
    /// Display name.
    pub username: String,
    /// Number of approved captures.
    pub approved_captures: i64,
    /// Current point total.
    pub points: i64,
}

/// Ranks users by approved submission count.
#[derive(Clone)]
pub struct LeaderboardService {
    users: Arc<dyn UserStore>,
    submissions: Arc<dyn SubmissionStore>,
}

impl std::fmt::Debug for LeaderboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardService").finish()
    }
}

impl LeaderboardService {
    /// Creates a new leaderboard service.
    pub fn new(users: Arc<dyn UserStore>, submissions: Arc<dyn SubmissionStore>) -> Self {
        Self { users, submissions }
    }

    /// Current standings, most approved captures first. Users with no
    /// approved captures are included at zero.
    pub async fn standings(&self) -> AppResult<Vec<LeaderboardEntry>> {
        let counts: HashMap<Uuid, i64> = self
            .submissions
            .count_approved_per_user()
            .await?
            .into_iter()
            .collect();

        let mut entries: Vec<LeaderboardEntry> = self
            .users
            .list_all()
            .await?
            .into_iter()
            .map(|user| LeaderboardEntry {
                approved_captures: counts.get(&user.id).copied().unwrap_or(0),
                user_id: user.id,
                username: user.username,
                points: user.points,
            })
            .collect();

        entries.sort_by(|a, b| {
            b.approved_captures
                .cmp(&a.approved_captures)
                .then_with(|| b.points.cmp(&a.points))
                .then_with(|| a.username.cmp(&b.username))
        });

        Ok(entries)
    }
}
