//! Application builder — wires repositories, services, and the router
//! into a running Axum server.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use dailydrop_core::config::AppConfig;
use dailydrop_core::error::AppError;
use dailydrop_database::repositories::drop::DropRepository;
use dailydrop_database::repositories::reward::RewardRepository;
use dailydrop_database::repositories::submission::SubmissionRepository;
use dailydrop_database::repositories::user::UserRepository;
use dailydrop_entity::drop::DropStore;
use dailydrop_entity::reward::RewardStore;
use dailydrop_entity::submission::SubmissionStore;
use dailydrop_entity::user::UserStore;
use dailydrop_service::{
    CaptureService, DropService, LeaderboardService, ProfileService, ReviewService, RewardService,
};
use dailydrop_storage::MediaStore;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the shared application state from configuration and a pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let media = MediaStore::from_config(&config.storage).await?;

    let drops: Arc<dyn DropStore> = Arc::new(DropRepository::new(db_pool.clone()));
    let submissions: Arc<dyn SubmissionStore> =
        Arc::new(SubmissionRepository::new(db_pool.clone()));
    let rewards: Arc<dyn RewardStore> = Arc::new(RewardRepository::new(db_pool.clone()));
    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));

    let capture_service = Arc::new(CaptureService::new(
        Arc::clone(&drops),
        Arc::clone(&submissions),
        Arc::clone(&users),
        media.clone(),
        &config.capture,
        &config.storage,
    ));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&drops),
        Arc::clone(&submissions),
        Arc::clone(&rewards),
        Arc::clone(&users),
    ));
    let drop_service = Arc::new(DropService::new(
        Arc::clone(&drops),
        Arc::clone(&rewards),
        media.clone(),
    ));
    let reward_service = Arc::new(RewardService::new(Arc::clone(&rewards)));
    let leaderboard_service = Arc::new(LeaderboardService::new(
        Arc::clone(&users),
        Arc::clone(&submissions),
    ));
    let profile_service = Arc::new(ProfileService::new(Arc::clone(&users)));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        media,
        capture_service,
        review_service,
        drop_service,
        reward_service,
        leaderboard_service,
        profile_service,
    })
}

/// Run the Daily Drop server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_addr}: {e}")))?;

    info!(addr = %bind_addr, "Daily Drop server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}
