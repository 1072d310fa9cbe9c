//! Submission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use dailydrop_core::types::GeoPoint;

use super::status::SubmissionStatus;

/// A user's photographic claim attempt against a specific drop.
///
/// Submissions form an append-mostly ledger: they are created by the
/// capture workflow in `pending` state and mutated exactly once, to
/// `approved` or `rejected`, by the review workflow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Submission {
    /// Unique submission identifier.
    pub id: Uuid,
    /// The submitting user.
    pub user_id: Uuid,
    /// The claimed drop.
    pub drop_id: Uuid,
    /// Public URL of the uploaded photo.
    pub photo_url: String,
    /// Review state.
    pub status: SubmissionStatus,
    /// Latitude the capture was made from, if the client reported one.
    pub capture_lat: Option<f64>,
    /// Longitude the capture was made from.
    pub capture_lng: Option<f64>,
    /// Server-assigned creation timestamp.
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// The reported capture location, when both coordinates are present.
    pub fn capture_location(&self) -> Option<GeoPoint> {
        match (self.capture_lat, self.capture_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }
}

/// Data required to create a new submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubmission {
    /// The submitting user.
    pub user_id: Uuid,
    /// The claimed drop.
    pub drop_id: Uuid,
    /// Public URL of the already-uploaded photo.
    pub photo_url: String,
    /// Where the capture was made from, if known.
    pub capture_location: Option<GeoPoint>,
}
