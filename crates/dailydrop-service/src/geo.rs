//! Proximity gating for capture attempts.

use dailydrop_core::types::geo::GeoPoint;

/// Outcome of a proximity check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityDecision {
    /// Whether the capture attempt may proceed.
    pub admitted: bool,
    /// Computed great-circle distance in meters, when the user's
    /// position was known.
    pub distance_meters: Option<f64>,
}

/// Gates capture attempts on distance to the drop location.
#[derive(Debug, Clone, Copy)]
pub struct ProximityEvaluator {
    threshold_meters: f64,
}

impl ProximityEvaluator {
    /// Create an evaluator with the given admission threshold in meters.
    pub fn new(threshold_meters: f64) -> Self {
        Self { threshold_meters }
    }

    /// The configured admission threshold in meters.
    pub fn threshold_meters(&self) -> f64 {
        self.threshold_meters
    }

    /// Decide whether a user at `position` may capture a drop at `target`.
    ///
    /// An unknown position always denies: there is no fallback location
    /// for admission purposes.
    pub fn evaluate(&self, position: Option<GeoPoint>, target: GeoPoint) -> ProximityDecision {
        match position {
            None => ProximityDecision {
                admitted: false,
                distance_meters: None,
            },
            Some(user) => {
                let distance = user.distance_meters(&target);
                ProximityDecision {
                    admitted: distance <= self.threshold_meters,
                    distance_meters: Some(distance),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use dailydrop_core::types::geo::EARTH_RADIUS_METERS;

    fn melbourne() -> GeoPoint {
        GeoPoint::new(-37.8111, 144.9469).unwrap()
    }

    #[test]
    fn unknown_position_always_denies() {
        let evaluator = ProximityEvaluator::new(f64::MAX);
        let decision = evaluator.evaluate(None, melbourne());
        assert!(!decision.admitted);
        assert_eq!(decision.distance_meters, None);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // Two points 30 m apart along a meridian.
        let d_lat = (30.0 / EARTH_RADIUS_METERS).to_degrees();
        let target = melbourne();
        let user = GeoPoint::new(target.lat + d_lat, target.lng).unwrap();

        let at_threshold = ProximityEvaluator::new(30.0).evaluate(Some(user), target);
        assert!(at_threshold.admitted);

        let below_threshold = ProximityEvaluator::new(29.0).evaluate(Some(user), target);
        assert!(!below_threshold.admitted);
        assert!(below_threshold.distance_meters.unwrap() > 29.0);
    }

    #[test]
    fn zero_distance_admits() {
        let decision = ProximityEvaluator::new(30.0).evaluate(Some(melbourne()), melbourne());
        assert!(decision.admitted);
        assert_eq!(decision.distance_meters, Some(0.0));
    }
}
