//! Magnolia - proximity queries for local-business discovery
//!
//! This library computes great-circle distances between a user position and
//! business records, ranks results within a radius, and filters by
//! administrative area. Location acquisition, reverse geocoding, and the
//! business catalog are collaborator seams injected by the host application.

pub mod catalog;
pub mod config;
pub mod error;
pub mod location;
pub mod models;
pub mod proximity;
pub mod query;
pub mod region;

pub use error::ProximityError;
pub use models::{BusinessCategory, BusinessRecord, GeoPoint, RankedBusiness, Region, UserLocation};
pub use proximity::{distance_miles, filter_by_admin_area, rank_by_proximity, DEFAULT_RADIUS_MILES};
