//! Reward catalog repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use dailydrop_core::error::{AppError, ErrorKind};
use dailydrop_core::result::AppResult;
use dailydrop_entity::reward::{CreateReward, Reward, RewardStore};

/// Repository for reward catalog operations.
#[derive(Debug, Clone)]
pub struct RewardRepository {
    pool: PgPool,
}

impl RewardRepository {
    /// Create a new reward repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RewardStore for RewardRepository {
    async fn insert(&self, reward: &CreateReward) -> AppResult<Reward> {
        sqlx::query_as::<_, Reward>(
            "INSERT INTO rewards (name, kind, value) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&reward.name)
        .bind(reward.kind)
        .bind(&reward.value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                AppError::conflict(format!(
                    "Reward name \"{}\" already exists. Please use a unique name.",
                    reward.name
                ))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to insert reward", e)
            }
        })
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Reward>> {
        sqlx::query_as::<_, Reward>("SELECT * FROM rewards WHERE name = $1")
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reward by name", e)
            })
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM rewards WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check reward name", e)
            })
    }

    async fn list_all(&self) -> AppResult<Vec<Reward>> {
        sqlx::query_as::<_, Reward>("SELECT * FROM rewards ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rewards", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rewards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reward", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Reward {id} not found")));
        }
        Ok(())
    }
}
