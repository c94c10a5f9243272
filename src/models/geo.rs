//! Geographic value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProximityError;

/// Geographic point (lat/lon in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that both coordinates are finite and within range
    /// (lat in [-90, 90], lon in [-180, 180]).
    pub fn validate(&self) -> Result<(), ProximityError> {
        let valid = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);

        if valid {
            Ok(())
        } else {
            Err(ProximityError::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

/// Resolved administrative area at city/state granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// A user position with its resolved administrative area, as produced by the
/// device-location and reverse-geocoding collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLocation {
    pub point: GeoPoint,

    /// `None` when reverse geocoding could not resolve the area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    /// When the position was acquired
    pub acquired_at: DateTime<Utc>,
}

impl UserLocation {
    pub fn new(point: GeoPoint, region: Option<Region>) -> Self {
        Self {
            point,
            region,
            acquired_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        assert!(GeoPoint::new(40.8126, -74.1526).validate().is_ok());
        assert!(GeoPoint::new(90.0, 180.0).validate().is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_point() {
        assert!(GeoPoint::new(90.1, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, -180.5).validate().is_err());
    }

    #[test]
    fn test_non_finite_point() {
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).validate().is_err());
    }
}
