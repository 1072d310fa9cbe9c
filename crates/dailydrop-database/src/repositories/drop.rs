//! Drop repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use dailydrop_core::error::{AppError, ErrorKind};
use dailydrop_core::result::AppResult;
use dailydrop_entity::drop::{CreateDrop, DropEvent, DropStore};

/// Repository for drop CRUD and query operations.
#[derive(Debug, Clone)]
pub struct DropRepository {
    pool: PgPool,
}

impl DropRepository {
    /// Create a new drop repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DropStore for DropRepository {
    async fn insert(&self, drop: &CreateDrop) -> AppResult<DropEvent> {
        sqlx::query_as::<_, DropEvent>(
            "INSERT INTO drops (name, reward_name, lat, lng, start_time, end_time, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&drop.name)
        .bind(&drop.reward_name)
        .bind(drop.location.lat)
        .bind(drop.location.lng)
        .bind(drop.start_time)
        .bind(drop.end_time)
        .bind(&drop.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert drop", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DropEvent>> {
        sqlx::query_as::<_, DropEvent>("SELECT * FROM drops WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find drop by id", e))
    }

    async fn list_active(&self, now: DateTime<Utc>) -> AppResult<Vec<DropEvent>> {
        sqlx::query_as::<_, DropEvent>(
            "SELECT * FROM drops WHERE start_time <= $1 AND end_time >= $1 \
             ORDER BY start_time DESC",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list active drops", e))
    }

    async fn list_all(&self) -> AppResult<Vec<DropEvent>> {
        sqlx::query_as::<_, DropEvent>("SELECT * FROM drops ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list drops", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM drops WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete drop", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Drop {id} not found")));
        }
        Ok(())
    }
}
