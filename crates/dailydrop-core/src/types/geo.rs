//! Validated geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic point in degrees.
///
/// Construction goes through [`GeoPoint::new`], which rejects non-finite
/// and out-of-range values so that distance computations can never produce
/// NaN-based results that would incorrectly admit a capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, in [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, in [-180, 180].
    pub lng: f64,
}

impl GeoPoint {
    /// Create a validated geographic point.
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(AppError::validation("Coordinates must be finite numbers"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::validation(format!(
                "Latitude {lat} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::validation(format!(
                "Longitude {lng} out of range [-180, 180]"
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Great-circle distance to another point in meters (haversine).
    pub fn distance_meters(&self, other: &Self) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }
}
