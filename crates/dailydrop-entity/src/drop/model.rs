//! Drop entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use dailydrop_core::types::GeoPoint;

/// A capturable, location- and time-bound event.
///
/// Named `DropEvent` rather than `Drop` to avoid colliding with the
/// `std::ops::Drop` trait in the prelude.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DropEvent {
    /// Unique drop identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Name of the reward granted on approval, resolved against the
    /// reward catalog at settlement time.
    pub reward_name: String,
    /// Latitude of the drop location in degrees.
    pub lat: f64,
    /// Longitude of the drop location in degrees.
    pub lng: f64,
    /// When the drop becomes capturable.
    pub start_time: DateTime<Utc>,
    /// When the drop stops being capturable. Always after `start_time`.
    pub end_time: DateTime<Utc>,
    /// Public URL of the drop's display image.
    pub image_url: String,
    /// When the drop was created.
    pub created_at: DateTime<Utc>,
}

impl DropEvent {
    /// The drop's location as a geographic point.
    ///
    /// Coordinates were validated on insert, so this is a plain read.
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }

    /// A drop is active iff `start_time <= now <= end_time`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now && now <= self.end_time
    }
}

/// Data required to create a new drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDrop {
    /// Display name.
    pub name: String,
    /// Reward catalog name granted on approval.
    pub reward_name: String,
    /// Drop location.
    pub location: GeoPoint,
    /// Capture window start.
    pub start_time: DateTime<Utc>,
    /// Capture window end.
    pub end_time: DateTime<Utc>,
    /// Public URL of the uploaded display image.
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(start: DateTime<Utc>, end: DateTime<Utc>) -> DropEvent {
        DropEvent {
            id: Uuid::new_v4(),
            name: "Flagstaff".into(),
            reward_name: "Coffee".into(),
            lat: -37.8111,
            lng: 144.9469,
            start_time: start,
            end_time: end,
            image_url: "http://localhost/media/drops/x.png".into(),
            created_at: start,
        }
    }

    #[test]
    fn active_window_is_inclusive() {
        let now = Utc::now();
        let drop = sample(now - Duration::hours(1), now + Duration::hours(1));
        assert!(drop.is_active(now));
        assert!(drop.is_active(drop.start_time));
        assert!(drop.is_active(drop.end_time));
        assert!(!drop.is_active(drop.end_time + Duration::seconds(1)));
        assert!(!drop.is_active(drop.start_time - Duration::seconds(1)));
    }
}
