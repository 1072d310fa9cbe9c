//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use dailydrop_core::config::AppConfig;
use dailydrop_service::{
    CaptureService, DropService, LeaderboardService, ProfileService, ReviewService, RewardService,
};
use dailydrop_storage::MediaStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped (or internally reference-counted) for
/// cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, used directly only by health checks.
    pub db_pool: PgPool,
    /// Media store for serving stored blobs.
    pub media: MediaStore,
    /// Capture workflow service.
    pub capture_service: Arc<CaptureService>,
    /// Submission review service.
    pub review_service: Arc<ReviewService>,
    /// Drop administration service.
    pub drop_service: Arc<DropService>,
    /// Reward catalog service.
    pub reward_service: Arc<RewardService>,
    /// Leaderboard service.
    pub leaderboard_service: Arc<LeaderboardService>,
    /// Profile service.
    pub profile_service: Arc<ProfileService>,
}
