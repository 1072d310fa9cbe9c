//! Reward kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a reward is settled on approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reward_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    /// The reward value is an integer added to the user's point counter.
    Points,
    /// Anything else: settled by issuing a reward grant under the user.
    Voucher,
}

impl RewardKind {
    /// Parse a catalog type label. Only `"points"` (case-insensitive)
    /// settles as points; every other label settles as a voucher.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("points") {
            Self::Points
        } else {
            Self::Voucher
        }
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Voucher => "voucher",
        }
    }
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_points_settles_as_points() {
        assert_eq!(RewardKind::from_label("Points"), RewardKind::Points);
        assert_eq!(RewardKind::from_label("POINTS"), RewardKind::Points);
        assert_eq!(RewardKind::from_label("Voucher"), RewardKind::Voucher);
        assert_eq!(RewardKind::from_label("free coffee"), RewardKind::Voucher);
    }
}
