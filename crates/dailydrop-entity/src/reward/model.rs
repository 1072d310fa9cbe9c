//! Reward catalog entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use dailydrop_core::error::AppError;
use dailydrop_core::result::AppResult;

use super::kind::RewardKind;

/// A catalog entry describing an award, referenced by name from drops.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reward {
    /// Unique reward identifier.
    pub id: Uuid,
    /// Unique catalog name. Drops reference rewards by this name.
    pub name: String,
    /// How the reward is settled.
    pub kind: RewardKind,
    /// Numeric string for points rewards, descriptive string otherwise.
    pub value: String,
    /// When the catalog entry was created.
    pub created_at: DateTime<Utc>,
}

impl Reward {
    /// Parse the point amount for a points reward.
    ///
    /// Fails for non-points kinds and for non-numeric values; settlement
    /// must abort in both cases without mutating anything.
    pub fn point_value(&self) -> AppResult<i64> {
        if self.kind != RewardKind::Points {
            return Err(AppError::validation(format!(
                "Reward '{}' is not a points reward",
                self.name
            )));
        }
        self.value.trim().parse::<i64>().map_err(|_| {
            AppError::validation(format!(
                "Invalid point value \"{}\" for reward '{}'",
                self.value, self.name
            ))
        })
    }
}

/// Data required to create a new reward catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReward {
    /// Unique catalog name.
    pub name: String,
    /// Settlement kind.
    pub kind: RewardKind,
    /// Reward value (numeric string for points).
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(kind: RewardKind, value: &str) -> Reward {
        Reward {
            id: Uuid::new_v4(),
            name: "Fifty".into(),
            kind,
            value: value.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn parses_numeric_point_values() {
        assert_eq!(reward(RewardKind::Points, "50").point_value().unwrap(), 50);
        assert_eq!(
            reward(RewardKind::Points, " 20 ").point_value().unwrap(),
            20
        );
    }

    #[test]
    fn rejects_non_numeric_and_non_points() {
        assert!(reward(RewardKind::Points, "abc").point_value().is_err());
        assert!(reward(RewardKind::Voucher, "50").point_value().is_err());
    }
}
