//! Issued voucher grants.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::super::reward::{Reward, RewardKind};

/// How long an issued voucher stays redeemable.
pub const GRANT_VALIDITY_DAYS: i64 = 30;

/// An issued voucher instance recorded under a user.
///
/// Created exactly once per approved non-points submission and never
/// mutated afterward. The `claimed` flag exists for a redemption flow
/// that lives outside this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RewardGrant {
    /// Unique grant identifier.
    pub id: Uuid,
    /// The user the voucher was issued to.
    pub user_id: Uuid,
    /// The drop whose approval issued this grant.
    pub drop_id: Uuid,
    /// Snapshot of the reward's catalog name at issuance.
    pub name: String,
    /// Settlement kind snapshot.
    pub kind: RewardKind,
    /// Reward value snapshot.
    pub value: String,
    /// Whether the voucher has been redeemed.
    pub claimed: bool,
    /// Issuance timestamp.
    pub issued_at: DateTime<Utc>,
    /// Expiration timestamp, fixed at issuance + [`GRANT_VALIDITY_DAYS`].
    pub expires_at: DateTime<Utc>,
}

/// Data required to issue a new voucher grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRewardGrant {
    /// The drop whose approval issues this grant.
    pub drop_id: Uuid,
    /// Reward name snapshot.
    pub name: String,
    /// Settlement kind snapshot.
    pub kind: RewardKind,
    /// Reward value snapshot.
    pub value: String,
    /// Issuance timestamp.
    pub issued_at: DateTime<Utc>,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl CreateRewardGrant {
    /// Snapshot a catalog reward into a grant issued at `issued_at`.
    pub fn from_reward(reward: &Reward, drop_id: Uuid, issued_at: DateTime<Utc>) -> Self {
        Self {
            drop_id,
            name: reward.name.clone(),
            kind: reward.kind,
            value: reward.value.clone(),
            issued_at,
            expires_at: issued_at + Duration::days(GRANT_VALIDITY_DAYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_thirty_days_from_issuance() {
        let reward = Reward {
            id: Uuid::new_v4(),
            name: "Free Coffee".into(),
            kind: RewardKind::Voucher,
            value: "1x flat white".into(),
            created_at: Utc::now(),
        };
        let issued = Utc::now();
        let grant = CreateRewardGrant::from_reward(&reward, Uuid::new_v4(), issued);
        assert_eq!(grant.expires_at - grant.issued_at, Duration::days(30));
        assert_eq!(grant.name, "Free Coffee");
    }
}
