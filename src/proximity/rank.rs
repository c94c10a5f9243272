//! Radius ranking and administrative-area filtering.

use tracing::debug;

use super::distance::haversine_miles;
use crate::error::ProximityError;
use crate::models::{BusinessRecord, RankedBusiness, UserLocation};

/// Radius applied when the caller does not supply one, in miles.
pub const DEFAULT_RADIUS_MILES: f64 = 10.0;

/// Rank businesses by distance from `origin`, keeping those within
/// `radius_miles`.
///
/// Each distance is rounded half-away-from-zero to one decimal; that rounded
/// value is what the radius cutoff compares against and what the result is
/// sorted by, ascending. Equal distances keep their input order (stable
/// sort, no secondary key). The input is never mutated, and an empty input
/// or an empty result after filtering is an `Ok` outcome.
pub fn rank_by_proximity(
    origin: &UserLocation,
    businesses: &[BusinessRecord],
    radius_miles: f64,
) -> Result<Vec<RankedBusiness>, ProximityError> {
    if !radius_miles.is_finite() || radius_miles < 0.0 {
        return Err(ProximityError::InvalidRadius(radius_miles));
    }
    origin.point.validate()?;
    for business in businesses {
        business.position.validate()?;
    }

    let mut ranked: Vec<RankedBusiness> = businesses
        .iter()
        .map(|business| RankedBusiness {
            distance_miles: round_tenth(haversine_miles(origin.point, business.position)),
            business: business.clone(),
        })
        .filter(|r| r.distance_miles <= radius_miles)
        .collect();

    // Vec::sort_by is stable, so ties keep catalog order
    ranked.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));

    debug!(
        "ranked {} of {} businesses within {} miles of ({}, {})",
        ranked.len(),
        businesses.len(),
        radius_miles,
        origin.point.lat,
        origin.point.lon
    );

    Ok(ranked)
}

/// Filter businesses to an administrative area.
///
/// Case-insensitive exact match on both city and state; preserves input
/// order. No distance computation involved, for callers that have a resolved
/// place name but no coordinates.
pub fn filter_by_admin_area<'a>(
    city: &str,
    state: &str,
    businesses: &'a [BusinessRecord],
) -> Vec<&'a BusinessRecord> {
    let city = city.to_lowercase();
    let state = state.to_lowercase();

    businesses
        .iter()
        .filter(|b| {
            b.address.city.to_lowercase() == city && b.address.state.to_lowercase() == state
        })
        .collect()
}

fn round_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}
