//! Proximity query operations.
//!
//! Pure, synchronous functions over geographic points and catalog records:
//! great-circle distance, radius ranking, and administrative-area filtering.
//! No I/O, no shared state; async belongs to the collaborator seams in
//! [`crate::location`], [`crate::region`] and [`crate::catalog`].

pub mod distance;
pub mod rank;

pub use distance::distance_miles;
pub use rank::{filter_by_admin_area, rank_by_proximity, DEFAULT_RADIUS_MILES};
