//! Capture workflow configuration.

use serde::{Deserialize, Serialize};

/// Settings for the proximity-gated capture workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Maximum admissible distance in meters between the user and a drop
    /// for a capture attempt to proceed. Deployments have run anywhere
    /// from 30 m (street level) to 3000 m (city-wide events).
    #[serde(default = "default_threshold")]
    pub proximity_threshold_meters: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_meters: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    30.0
}
