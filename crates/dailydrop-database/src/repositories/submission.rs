//! Submission repository implementation, including atomic settlement.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use dailydrop_core::error::{AppError, ErrorKind};
use dailydrop_core::result::AppResult;
use dailydrop_entity::submission::{CreateSubmission, Submission, SubmissionStore};
use dailydrop_entity::user::CreateRewardGrant;

/// Repository for the submissions ledger.
///
/// Settlement methods run the pending check, the status flip and the
/// reward effect inside a single transaction so a submission can only
/// ever be settled once.
#[derive(Debug, Clone)]
pub struct SubmissionRepository {
    pool: PgPool,
}

impl SubmissionRepository {
    /// Create a new submission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flip a pending submission to `status` inside `tx`. Returns `false`
    /// when the submission was already settled (or does not exist).
    async fn flip_pending(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        submission_id: Uuid,
        status: &str,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE submissions SET status = $2::submission_status \
             WHERE id = $1 AND status = 'pending'",
        )
        .bind(submission_id)
        .bind(status)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update submission status", e)
        })?;

        Ok(result.rows_affected() == 1)
    }
}

#[async_trait]
impl SubmissionStore for SubmissionRepository {
    async fn insert(&self, submission: &CreateSubmission) -> AppResult<Submission> {
        sqlx::query_as::<_, Submission>(
            "INSERT INTO submissions (user_id, drop_id, photo_url, capture_lat, capture_lng) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(submission.user_id)
        .bind(submission.drop_id)
        .bind(&submission.photo_url)
        .bind(submission.capture_location.map(|p| p.lat))
        .bind(submission.capture_location.map(|p| p.lng))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                AppError::conflict("You have already submitted a photo for this drop")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to insert submission", e)
            }
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Submission>> {
        sqlx::query_as::<_, Submission>("SELECT * FROM submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find submission by id", e)
            })
    }

    async fn find_by_user_and_drop(
        &self,
        user_id: Uuid,
        drop_id: Uuid,
    ) -> AppResult<Option<Submission>> {
        sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions WHERE user_id = $1 AND drop_id = $2 LIMIT 1",
        )
        .bind(user_id)
        .bind(drop_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check for prior submission", e)
        })
    }

    async fn list_pending_for_drop(&self, drop_id: Uuid) -> AppResult<Vec<Submission>> {
        sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions WHERE drop_id = $1 AND status = 'pending' \
             ORDER BY submitted_at ASC",
        )
        .bind(drop_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending submissions", e)
        })
    }

    async fn count_pending_for_drop(&self, drop_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM submissions WHERE drop_id = $1 AND status = 'pending'",
        )
        .bind(drop_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count pending submissions", e)
        })
    }

    async fn count_approved_per_user(&self) -> AppResult<Vec<(Uuid, i64)>> {
        sqlx::query_as::<_, (Uuid, i64)>(
            "SELECT user_id, COUNT(*) FROM submissions WHERE status = 'approved' \
             GROUP BY user_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count approved submissions", e)
        })
    }

    async fn approve_with_points(
        &self,
        submission_id: Uuid,
        user_id: Uuid,
        points: i64,
    ) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        if !Self::flip_pending(&mut tx, submission_id, "approved").await? {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
            return Ok(false);
        }

        sqlx::query("UPDATE users SET points = points + $2 WHERE id = $1")
            .bind(user_id)
            .bind(points)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to credit points", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit approval", e)
        })?;
        Ok(true)
    }

    async fn approve_with_grant(
        &self,
        submission_id: Uuid,
        user_id: Uuid,
        grant: &CreateRewardGrant,
    ) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        if !Self::flip_pending(&mut tx, submission_id, "approved").await? {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO reward_grants \
             (user_id, drop_id, name, kind, value, claimed, issued_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7)",
        )
        .bind(user_id)
        .bind(grant.drop_id)
        .bind(&grant.name)
        .bind(grant.kind)
        .bind(&grant.value)
        .bind(grant.issued_at)
        .bind(grant.expires_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to issue grant", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit approval", e)
        })?;
        Ok(true)
    }

    async fn reject(&self, submission_id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let flipped = Self::flip_pending(&mut tx, submission_id, "rejected").await?;
        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit rejection", e)
        })?;
        Ok(flipped)
    }
}
