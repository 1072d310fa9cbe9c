//! User profile repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use dailydrop_core::error::{AppError, ErrorKind};
use dailydrop_core::result::AppResult;
use dailydrop_entity::user::{CreateUser, RewardGrant, User, UserStore};

/// Repository for user profiles and their issued grants.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn create_if_absent(&self, user: &CreateUser) -> AppResult<User> {
        // ON CONFLICT DO NOTHING returns no row for an existing profile,
        // so fall through to a plain select in that case.
        let inserted = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO NOTHING RETURNING *",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))?;

        if let Some(created) = inserted {
            return Ok(created);
        }

        self.find_by_id(user.id).await?.ok_or_else(|| {
            AppError::internal(format!("User {} vanished during provisioning", user.id))
        })
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    async fn list_grants(&self, user_id: Uuid) -> AppResult<Vec<RewardGrant>> {
        sqlx::query_as::<_, RewardGrant>(
            "SELECT * FROM reward_grants WHERE user_id = $1 ORDER BY issued_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list grants", e))
    }
}
