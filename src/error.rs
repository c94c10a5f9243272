//! Error taxonomy for proximity queries.

use thiserror::Error;

/// Errors produced by the proximity operations.
///
/// Empty inputs and empty results are valid outcomes, not errors. An
/// unresolved administrative area is reported by the region resolver as an
/// absent value, never through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProximityError {
    /// Latitude/longitude non-finite or outside valid range.
    #[error("invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Radius non-finite or negative.
    #[error("invalid radius: {0} miles")]
    InvalidRadius(f64),
}
