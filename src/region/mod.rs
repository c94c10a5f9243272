//! Administrative-area resolution for geographic points.

pub mod index;
pub mod resolver;

pub use index::StaticRegionIndex;
pub use resolver::RegionResolver;
