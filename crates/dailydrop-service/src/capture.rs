//! Drop capture workflow: proximity gate, duplicate guard, photo upload
//! and pending-submission creation.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use dailydrop_core::config::{CaptureConfig, StorageConfig};
use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;
use dailydrop_core::traits::blob::ByteStream;
use dailydrop_core::types::geo::GeoPoint;
use dailydrop_entity::drop::DropStore;
use dailydrop_entity::submission::{CreateSubmission, Submission, SubmissionStore};
use dailydrop_entity::user::{CreateUser, UserStore};
use dailydrop_storage::media::{MediaStore, extension_for_mime};
use dailydrop_storage::upload::{UploadOutcome, start_upload};

use crate::context::RequestContext;
use crate::geo::ProximityEvaluator;

/// A capture attempt against a drop.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    /// The drop being claimed.
    pub drop_id: Uuid,
    /// The user's reported position, if location services provided one.
    pub position: Option<GeoPoint>,
    /// Declared MIME type of the photo payload.
    pub content_type: Option<String>,
    /// Photo payload bytes.
    pub photo: Bytes,
}

/// Orchestrates the capture pipeline.
#[derive(Clone)]
pub struct CaptureService {
    drops: Arc<dyn DropStore>,
    submissions: Arc<dyn SubmissionStore>,
    users: Arc<dyn UserStore>,
    media: MediaStore,
    evaluator: ProximityEvaluator,
    max_upload_size_bytes: u64,
}

impl std::fmt::Debug for CaptureService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureService").finish()
    }
}

impl CaptureService {
    /// Creates a new capture service.
    pub fn new(
        drops: Arc<dyn DropStore>,
        submissions: Arc<dyn SubmissionStore>,
        users: Arc<dyn UserStore>,
        media: MediaStore,
        capture_config: &CaptureConfig,
        storage_config: &StorageConfig,
    ) -> Self {
        Self {
            drops,
            submissions,
            users,
            media,
            evaluator: ProximityEvaluator::new(capture_config.proximity_threshold_meters),
            max_upload_size_bytes: storage_config.max_upload_size_bytes,
        }
    }

    /// The proximity evaluator in use.
    pub fn evaluator(&self) -> ProximityEvaluator {
        self.evaluator
    }

    /// Attempt to capture a drop.
    ///
    /// Gate order is fixed: position, drop window, proximity, duplicate
    /// guard, payload validation, upload, submission insert. No blob is
    /// written unless every gate before the upload passed, and no
    /// submission row is written unless the upload fully completed.
    pub async fn capture(
        &self,
        ctx: &RequestContext,
        request: CaptureRequest,
    ) -> AppResult<Submission> {
        let Some(position) = request.position else {
            return Err(AppError::validation(
                "Location unavailable. Enable location services and try again",
            ));
        };

        let drop = self
            .drops
            .find_by_id(request.drop_id)
            .await?
            .ok_or_else(|| AppError::not_found("Drop not found"))?;

        let now = Utc::now();
        if !drop.is_active(now) {
            return Err(AppError::validation("This drop is not currently active"));
        }

        let decision = self.evaluator.evaluate(Some(position), drop.location());
        if !decision.admitted {
            let distance = decision.distance_meters.unwrap_or(f64::INFINITY);
            return Err(AppError::validation(format!(
                "You are too far away to capture this drop ({:.0} m, limit {:.0} m)",
                distance,
                self.evaluator.threshold_meters()
            )));
        }

        // Duplicate guard: any prior submission for the pair, regardless
        // of status, blocks a new attempt before any blob is written. The
        // store's unique index closes the remaining check-then-act window.
        if self
            .submissions
            .find_by_user_and_drop(ctx.user_id, request.drop_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "You have already captured this drop",
            ));
        }

        let extension = self.validate_photo(&request)?;

        // The submission row carries a user FK, so make sure the profile
        // exists before uploading.
        self.users
            .create_if_absent(&CreateUser {
                id: ctx.user_id,
                username: ctx.username.clone(),
                email: None,
            })
            .await?;

        let key = MediaStore::submission_key(request.drop_id, ctx.user_id, now, extension);
        let total = request.photo.len() as u64;
        let stream: ByteStream = Box::pin(futures::stream::once(async move {
            Ok(request.photo)
        }));

        let handle = start_upload(self.media.blobs(), key.clone(), stream, Some(total));
        match handle.join().await? {
            UploadOutcome::Completed { bytes_written } => {
                info!(
                    user_id = %ctx.user_id,
                    drop_id = %request.drop_id,
                    key,
                    bytes = bytes_written,
                    "Capture photo uploaded"
                );
            }
            UploadOutcome::Cancelled => {
                return Err(AppError::internal("Photo upload was cancelled"));
            }
        }

        let create = CreateSubmission {
            user_id: ctx.user_id,
            drop_id: request.drop_id,
            photo_url: self.media.public_url(&key),
            capture_location: Some(position),
        };

        let submission = match self.submissions.insert(&create).await {
            Ok(submission) => submission,
            Err(e) => {
                // The blob is already durable with no referencing row.
                // There is no compensating delete; log enough to find it.
                warn!(
                    user_id = %ctx.user_id,
                    drop_id = %request.drop_id,
                    key,
                    error = %e,
                    "Submission insert failed after upload, blob is orphaned"
                );
                return Err(e);
            }
        };

        info!(
            user_id = %ctx.user_id,
            drop_id = %request.drop_id,
            submission_id = %submission.id,
            "Capture submitted for review"
        );
        Ok(submission)
    }

    /// Validate the photo payload and return its storage extension.
    fn validate_photo(&self, request: &CaptureRequest) -> AppResult<&'static str> {
        if request.photo.is_empty() {
            return Err(AppError::validation("Photo payload is empty"));
        }
        if request.photo.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "Photo exceeds maximum upload size of {} bytes",
                self.max_upload_size_bytes
            )));
        }

        let mime = request
            .content_type
            .as_deref()
            .ok_or_else(|| AppError::validation("Photo content type is required"))?;
        let extension = extension_for_mime(mime)
            .ok_or_else(|| AppError::validation(format!("Unsupported image type: {mime}")))?;

        // Sniff the payload as well; the declared type alone is not trusted.
        image::guess_format(&request.photo)
            .map_err(|_| AppError::validation("Payload is not a recognized image"))?;

        Ok(extension)
    }
}
