//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create reward request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRewardRequest {
    /// Unique catalog name.
    #[validate(length(min = 1, max = 200, message = "Reward name is required"))]
    pub name: String,
    /// Settlement kind label, e.g. "Points" or "Voucher".
    #[validate(length(min = 1, message = "Reward type is required"))]
    pub kind: String,
    /// Numeric string for points, descriptive string otherwise.
    #[validate(length(min = 1, message = "Reward value is required"))]
    pub value: String,
}

/// Approve submission request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApproveRequest {
    /// Apply the double-points variant (point rewards only).
    #[serde(default)]
    pub double_points: bool,
}

/// Profile provisioning request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvisionRequest {
    /// Email from the identity provider, if available.
    pub email: Option<String>,
}
