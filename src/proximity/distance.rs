//! Great-circle distance between geographic points.

use crate::error::ProximityError;
use crate::models::GeoPoint;

const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance in miles between two points, by the Haversine
/// formula.
///
/// Fails fast on non-finite or out-of-range coordinates. For valid inputs
/// the result is symmetric in its arguments, zero for identical points, and
/// never negative, including antipodal points and the poles.
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> Result<f64, ProximityError> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_miles(a, b))
}

/// Haversine on already-validated points.
pub(crate) fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    // Floating error can push h just past 1 for near-antipodal points
    let h = h.min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}
