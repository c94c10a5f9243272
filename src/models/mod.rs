//! Core data models for proximity queries.

pub mod business;
pub mod geo;

pub use business::{BusinessCategory, BusinessRecord, ContactInfo, RankedBusiness, StreetAddress};
pub use geo::{GeoPoint, Region, UserLocation};
