//! End-to-end capture and settlement flow over in-memory stores and a
//! tempdir-backed media store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use dailydrop_core::config::{CaptureConfig, StorageConfig};
use dailydrop_core::error::{AppError, ErrorKind};
use dailydrop_core::result::AppResult;
use dailydrop_core::traits::blob::BlobStore;
use dailydrop_core::types::geo::GeoPoint;
use dailydrop_entity::drop::{CreateDrop, DropEvent, DropStore};
use dailydrop_entity::reward::{CreateReward, Reward, RewardKind, RewardStore};
use dailydrop_entity::submission::{
    CreateSubmission, Submission, SubmissionStatus, SubmissionStore,
};
use dailydrop_entity::user::{CreateRewardGrant, CreateUser, RewardGrant, User, UserStore};
use dailydrop_service::{
    CaptureRequest, CaptureService, LeaderboardService, RequestContext, ReviewService,
};
use dailydrop_storage::media::MediaStore;
use dailydrop_storage::providers::LocalBlobStore;

/// Magic bytes are all the sniffer needs.
const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

const MELBOURNE: (f64, f64) = (-37.8111, 144.9469);

#[derive(Debug, Default)]
struct MemState {
    drops: HashMap<Uuid, DropEvent>,
    submissions: Vec<Submission>,
    rewards: Vec<Reward>,
    users: HashMap<Uuid, User>,
    grants: Vec<RewardGrant>,
    fail_submission_insert: bool,
}

/// One in-memory store implementing all four entity store contracts.
#[derive(Debug, Default)]
struct MemStore {
    state: Mutex<MemState>,
}

#[async_trait]
impl DropStore for MemStore {
    async fn insert(&self, drop: &CreateDrop) -> AppResult<DropEvent> {
        let mut state = self.state.lock().unwrap();
        let row = DropEvent {
            id: Uuid::new_v4(),
            name: drop.name.clone(),
            reward_name: drop.reward_name.clone(),
            lat: drop.location.lat,
            lng: drop.location.lng,
            start_time: drop.start_time,
            end_time: drop.end_time,
            image_url: drop.image_url.clone(),
            created_at: Utc::now(),
        };
        state.drops.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DropEvent>> {
        Ok(self.state.lock().unwrap().drops.get(&id).cloned())
    }

    async fn list_active(&self, now: DateTime<Utc>) -> AppResult<Vec<DropEvent>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .drops
            .values()
            .filter(|d| d.is_active(now))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> AppResult<Vec<DropEvent>> {
        Ok(self.state.lock().unwrap().drops.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.state
            .lock()
            .unwrap()
            .drops
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Drop not found"))
    }
}

#[async_trait]
impl SubmissionStore for MemStore {
    async fn insert(&self, submission: &CreateSubmission) -> AppResult<Submission> {
        let mut state = self.state.lock().unwrap();
        if state.fail_submission_insert {
            return Err(AppError::database("Simulated insert failure"));
        }
        if state
            .submissions
            .iter()
            .any(|s| s.user_id == submission.user_id && s.drop_id == submission.drop_id)
        {
            return Err(AppError::conflict(
                "You have already submitted a photo for this drop",
            ));
        }
        let row = Submission {
            id: Uuid::new_v4(),
            user_id: submission.user_id,
            drop_id: submission.drop_id,
            photo_url: submission.photo_url.clone(),
            status: SubmissionStatus::Pending,
            capture_lat: submission.capture_location.map(|p| p.lat),
            capture_lng: submission.capture_location.map(|p| p.lng),
            submitted_at: Utc::now(),
        };
        state.submissions.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Submission>> {
        let state = self.state.lock().unwrap();
        Ok(state.submissions.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_user_and_drop(
        &self,
        user_id: Uuid,
        drop_id: Uuid,
    ) -> AppResult<Option<Submission>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .submissions
            .iter()
            .find(|s| s.user_id == user_id && s.drop_id == drop_id)
            .cloned())
    }

    async fn list_pending_for_drop(&self, drop_id: Uuid) -> AppResult<Vec<Submission>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .submissions
            .iter()
            .filter(|s| s.drop_id == drop_id && s.status == SubmissionStatus::Pending)
            .cloned()
            .collect())
    }

    async fn count_pending_for_drop(&self, drop_id: Uuid) -> AppResult<i64> {
        Ok(self.list_pending_for_drop(drop_id).await?.len() as i64)
    }

    async fn count_approved_per_user(&self) -> AppResult<Vec<(Uuid, i64)>> {
        let state = self.state.lock().unwrap();
        let mut counts: HashMap<Uuid, i64> = HashMap::new();
        for s in &state.submissions {
            if s.status == SubmissionStatus::Approved {
                *counts.entry(s.user_id).or_default() += 1;
            }
        }
        Ok(counts.into_iter().collect())
    }

    async fn approve_with_points(
        &self,
        submission_id: Uuid,
        user_id: Uuid,
        points: i64,
    ) -> AppResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(submission) = state
            .submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
        else {
            return Ok(false);
        };
        if submission.status != SubmissionStatus::Pending {
            return Ok(false);
        }
        submission.status = SubmissionStatus::Approved;
        if let Some(user) = state.users.get_mut(&user_id) {
            user.points += points;
        }
        Ok(true)
    }

    async fn approve_with_grant(
        &self,
        submission_id: Uuid,
        user_id: Uuid,
        grant: &CreateRewardGrant,
    ) -> AppResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(submission) = state
            .submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
        else {
            return Ok(false);
        };
        if submission.status != SubmissionStatus::Pending {
            return Ok(false);
        }
        submission.status = SubmissionStatus::Approved;
        state.grants.push(RewardGrant {
            id: Uuid::new_v4(),
            user_id,
            drop_id: grant.drop_id,
            name: grant.name.clone(),
            kind: grant.kind,
            value: grant.value.clone(),
            claimed: false,
            issued_at: grant.issued_at,
            expires_at: grant.expires_at,
        });
        Ok(true)
    }

    async fn reject(&self, submission_id: Uuid) -> AppResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(submission) = state
            .submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
        else {
            return Ok(false);
        };
        if submission.status != SubmissionStatus::Pending {
            return Ok(false);
        }
        submission.status = SubmissionStatus::Rejected;
        Ok(true)
    }
}

#[async_trait]
impl RewardStore for MemStore {
    async fn insert(&self, reward: &CreateReward) -> AppResult<Reward> {
        let mut state = self.state.lock().unwrap();
        let row = Reward {
            id: Uuid::new_v4(),
            name: reward.name.clone(),
            kind: reward.kind,
            value: reward.value.clone(),
            created_at: Utc::now(),
        };
        state.rewards.push(row.clone());
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Reward>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rewards
            .iter()
            .filter(|r| r.name == name)
            .cloned()
            .collect())
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        Ok(!self.find_by_name(name).await?.is_empty())
    }

    async fn list_all(&self) -> AppResult<Vec<Reward>> {
        Ok(self.state.lock().unwrap().rewards.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.rewards.len();
        state.rewards.retain(|r| r.id != id);
        if state.rewards.len() == before {
            return Err(AppError::not_found("Reward not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }

    async fn create_if_absent(&self, user: &CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().unwrap();
        let row = state.users.entry(user.id).or_insert_with(|| User {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            points: 0,
            created_at: Utc::now(),
        });
        Ok(row.clone())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.values().cloned().collect())
    }

    async fn list_grants(&self, user_id: Uuid) -> AppResult<Vec<RewardGrant>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .grants
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }
}

struct Harness {
    store: Arc<MemStore>,
    blobs: Arc<dyn BlobStore>,
    capture: CaptureService,
    review: ReviewService,
    _media_dir: tempfile::TempDir,
}

impl Harness {
    async fn new() -> Self {
        let media_dir = tempfile::tempdir().unwrap();
        let blobs: Arc<dyn BlobStore> = Arc::new(
            LocalBlobStore::new(media_dir.path().to_str().unwrap())
                .await
                .unwrap(),
        );
        let media = MediaStore::new(Arc::clone(&blobs), "http://localhost:8080/media");

        let store = Arc::new(MemStore::default());
        let drops: Arc<dyn DropStore> = store.clone();
        let submissions: Arc<dyn SubmissionStore> = store.clone();
        let rewards: Arc<dyn RewardStore> = store.clone();
        let users: Arc<dyn UserStore> = store.clone();

        let capture_config = CaptureConfig::default();
        let storage_config = StorageConfig {
            provider: "local".into(),
            public_base_url: "http://localhost:8080/media".into(),
            max_upload_size_bytes: 1024 * 1024,
            local: Default::default(),
            s3: Default::default(),
        };

        let capture = CaptureService::new(
            Arc::clone(&drops),
            Arc::clone(&submissions),
            Arc::clone(&users),
            media,
            &capture_config,
            &storage_config,
        );
        let review = ReviewService::new(drops, Arc::clone(&submissions), rewards, users);

        Self {
            store,
            blobs,
            capture,
            review,
            _media_dir: media_dir,
        }
    }

    async fn seed_reward(&self, name: &str, kind: RewardKind, value: &str) -> Reward {
        RewardStore::insert(
            self.store.as_ref(),
            &CreateReward {
                name: name.into(),
                kind,
                value: value.into(),
            },
        )
        .await
        .unwrap()
    }

    async fn seed_drop(&self, reward_name: &str) -> DropEvent {
        let now = Utc::now();
        DropStore::insert(
            self.store.as_ref(),
            &CreateDrop {
                name: "Flagstaff Gardens".into(),
                reward_name: reward_name.into(),
                location: GeoPoint::new(MELBOURNE.0, MELBOURNE.1).unwrap(),
                start_time: now - Duration::hours(1),
                end_time: now + Duration::hours(1),
                image_url: "http://localhost:8080/media/drops/x.png".into(),
            },
        )
        .await
        .unwrap()
    }

    fn request(&self, drop_id: Uuid, position: Option<(f64, f64)>) -> CaptureRequest {
        CaptureRequest {
            drop_id,
            position: position.map(|(lat, lng)| GeoPoint::new(lat, lng).unwrap()),
            content_type: Some("image/png".into()),
            photo: Bytes::from_static(PNG),
        }
    }

    fn blob_key_of(&self, submission: &Submission) -> String {
        submission
            .photo_url
            .strip_prefix("http://localhost:8080/media/")
            .unwrap()
            .to_string()
    }
}

fn player() -> RequestContext {
    RequestContext::new(Uuid::new_v4(), "maya".into(), false)
}

fn admin() -> RequestContext {
    RequestContext::new(Uuid::new_v4(), "ops".into(), true)
}

#[tokio::test]
async fn capture_is_denied_without_a_position() {
    let h = Harness::new().await;
    h.seed_reward("Coffee", RewardKind::Voucher, "1x flat white")
        .await;
    let drop = h.seed_drop("Coffee").await;

    let err = h
        .capture
        .capture(&player(), h.request(drop.id, None))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // Nothing was uploaded and nothing was recorded.
    assert!(h.store.state.lock().unwrap().submissions.is_empty());
}

#[tokio::test]
async fn capture_is_denied_beyond_the_threshold() {
    let h = Harness::new().await;
    h.seed_reward("Coffee", RewardKind::Voucher, "1x flat white")
        .await;
    let drop = h.seed_drop("Coffee").await;

    // Roughly 1.9 km north of the drop, far beyond the 30 m default.
    let err = h
        .capture
        .capture(
            &player(),
            h.request(drop.id, Some((MELBOURNE.0 + 0.017, MELBOURNE.1))),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("too far"));
}

#[tokio::test]
async fn duplicate_capture_is_rejected_before_any_upload() {
    let h = Harness::new().await;
    h.seed_reward("Coffee", RewardKind::Voucher, "1x flat white")
        .await;
    let drop = h.seed_drop("Coffee").await;
    let ctx = player();

    let first = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();

    // Reject the first attempt; even a terminal prior submission blocks.
    h.review.reject(&admin(), first.id).await.unwrap();

    let err = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    // Only the first attempt's blob exists.
    assert_eq!(h.store.state.lock().unwrap().submissions.len(), 1);
    assert!(h.blobs.exists(&h.blob_key_of(&first)).await.unwrap());
}

#[tokio::test]
async fn successful_capture_stores_blob_before_the_record() {
    let h = Harness::new().await;
    h.seed_reward("Coffee", RewardKind::Voucher, "1x flat white")
        .await;
    let drop = h.seed_drop("Coffee").await;

    let submission = h
        .capture
        .capture(&player(), h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();

    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert!(h.blobs.exists(&h.blob_key_of(&submission)).await.unwrap());
    assert!(submission.capture_location().is_some());
}

#[tokio::test]
async fn insert_failure_after_upload_leaves_an_orphaned_blob() {
    let h = Harness::new().await;
    h.seed_reward("Coffee", RewardKind::Voucher, "1x flat white")
        .await;
    let drop = h.seed_drop("Coffee").await;
    h.store.state.lock().unwrap().fail_submission_insert = true;

    let err = h
        .capture
        .capture(&player(), h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Database);

    // No submission row; the already-written blob stays behind.
    assert!(h.store.state.lock().unwrap().submissions.is_empty());
}

#[tokio::test]
async fn non_image_payloads_are_rejected() {
    let h = Harness::new().await;
    h.seed_reward("Coffee", RewardKind::Voucher, "1x flat white")
        .await;
    let drop = h.seed_drop("Coffee").await;

    let mut request = h.request(drop.id, Some(MELBOURNE));
    request.photo = Bytes::from_static(b"definitely not an image");
    let err = h.capture.capture(&player(), request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let mut request = h.request(drop.id, Some(MELBOURNE));
    request.content_type = Some("application/pdf".into());
    let err = h.capture.capture(&player(), request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn points_approval_credits_the_exact_value() {
    let h = Harness::new().await;
    h.seed_reward("Gold Star", RewardKind::Points, "50").await;
    let drop = h.seed_drop("Gold Star").await;
    let ctx = player();

    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();

    let settled = h.review.approve(&admin(), submission.id, false).await.unwrap();
    assert_eq!(settled.status, SubmissionStatus::Approved);

    let user = UserStore::find_by_id(h.store.as_ref(), ctx.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.points, 50);
}

#[tokio::test]
async fn double_points_doubles_the_base_value() {
    let h = Harness::new().await;
    h.seed_reward("Gold Star", RewardKind::Points, "50").await;
    let drop = h.seed_drop("Gold Star").await;
    let ctx = player();

    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();

    h.review.approve(&admin(), submission.id, true).await.unwrap();

    let user = UserStore::find_by_id(h.store.as_ref(), ctx.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.points, 100);
}

#[tokio::test]
async fn non_numeric_point_value_aborts_settlement() {
    let h = Harness::new().await;
    h.seed_reward("Broken", RewardKind::Points, "abc").await;
    let drop = h.seed_drop("Broken").await;
    let ctx = player();

    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();

    let err = h
        .review
        .approve(&admin(), submission.id, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // Submission stays pending, points unchanged.
    let reloaded = SubmissionStore::find_by_id(h.store.as_ref(), submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.status, SubmissionStatus::Pending);
    let user = UserStore::find_by_id(h.store.as_ref(), ctx.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.points, 0);
}

#[tokio::test]
async fn missing_or_ambiguous_reward_aborts_settlement() {
    let h = Harness::new().await;
    let drop = h.seed_drop("Phantom").await;
    let ctx = player();

    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();

    let err = h
        .review
        .approve(&admin(), submission.id, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("not found"));

    // Two catalog entries under the same name is just as fatal.
    h.seed_reward("Phantom", RewardKind::Points, "10").await;
    h.seed_reward("Phantom", RewardKind::Points, "20").await;
    let err = h
        .review
        .approve(&admin(), submission.id, false)
        .await
        .unwrap_err();
    assert!(err.message.contains("ambiguous"));
}

#[tokio::test]
async fn voucher_approval_issues_one_thirty_day_grant() {
    let h = Harness::new().await;
    h.seed_reward("Free Coffee", RewardKind::Voucher, "1x flat white")
        .await;
    let drop = h.seed_drop("Free Coffee").await;
    let ctx = player();

    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();
    h.review.approve(&admin(), submission.id, false).await.unwrap();

    let grants = UserStore::list_grants(h.store.as_ref(), ctx.user_id)
        .await
        .unwrap();
    assert_eq!(grants.len(), 1);
    let grant = &grants[0];
    assert_eq!(grant.expires_at - grant.issued_at, Duration::days(30));
    assert!(!grant.claimed);
    assert_eq!(grant.drop_id, drop.id);
    assert_eq!(grant.name, "Free Coffee");
}

#[tokio::test]
async fn double_points_is_refused_for_vouchers() {
    let h = Harness::new().await;
    h.seed_reward("Free Coffee", RewardKind::Voucher, "1x flat white")
        .await;
    let drop = h.seed_drop("Free Coffee").await;
    let ctx = player();

    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();

    let err = h
        .review
        .approve(&admin(), submission.id, true)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let reloaded = SubmissionStore::find_by_id(h.store.as_ref(), submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.status, SubmissionStatus::Pending);
}

#[tokio::test]
async fn settled_submissions_are_immutable() {
    let h = Harness::new().await;
    h.seed_reward("Gold Star", RewardKind::Points, "20").await;
    let drop = h.seed_drop("Gold Star").await;
    let ctx = player();

    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();
    h.review.approve(&admin(), submission.id, false).await.unwrap();

    let err = h
        .review
        .approve(&admin(), submission.id, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    let err = h.review.reject(&admin(), submission.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    // Points were credited exactly once.
    let user = UserStore::find_by_id(h.store.as_ref(), ctx.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.points, 20);
}

#[tokio::test]
async fn review_requires_the_admin_role() {
    let h = Harness::new().await;
    h.seed_reward("Gold Star", RewardKind::Points, "20").await;
    let drop = h.seed_drop("Gold Star").await;
    let ctx = player();

    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();

    let err = h
        .review
        .approve(&ctx, submission.id, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
}

#[tokio::test]
async fn end_to_end_capture_and_settlement() {
    let h = Harness::new().await;
    h.seed_reward("Gold Star", RewardKind::Points, "20").await;
    let drop = h.seed_drop("Gold Star").await;
    let ctx = player();

    // At the drop location, distance zero, threshold 30 m.
    let submission = h
        .capture
        .capture(&ctx, h.request(drop.id, Some(MELBOURNE)))
        .await
        .unwrap();
    assert_eq!(submission.status, SubmissionStatus::Pending);

    let pending = h.review.list_pending(&admin(), drop.id).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].username, ctx.username);

    let overview = h.review.overview(&admin()).await.unwrap();
    assert_eq!(overview.len(), 1);
    assert!(overview[0].active);
    assert_eq!(overview[0].pending_count, 1);

    let settled = h.review.approve(&admin(), submission.id, false).await.unwrap();
    assert_eq!(settled.status, SubmissionStatus::Approved);

    assert_eq!(h.review.count_pending(&admin(), drop.id).await.unwrap(), 0);
    let user = UserStore::find_by_id(h.store.as_ref(), ctx.user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.points, 20);

    // The leaderboard ranks the capturer above a user with no approvals.
    let bystander = RequestContext::new(Uuid::new_v4(), "alex".into(), false);
    UserStore::create_if_absent(
        h.store.as_ref(),
        &CreateUser {
            id: bystander.user_id,
            username: bystander.username.clone(),
            email: None,
        },
    )
    .await
    .unwrap();

    let leaderboard = LeaderboardService::new(h.store.clone(), h.store.clone());
    let standings = leaderboard.standings().await.unwrap();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].user_id, ctx.user_id);
    assert_eq!(standings[0].approved_captures, 1);
    assert_eq!(standings[1].approved_captures, 0);
}
