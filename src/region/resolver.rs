//! Region resolver seam.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{GeoPoint, Region};

/// Resolves a point to its administrative area.
///
/// Production implementations call an external geocoding provider.
/// `Ok(None)` means the area could not be resolved and is a normal outcome
/// callers must handle; `Err` is reserved for provider failures.
#[async_trait]
pub trait RegionResolver: Send + Sync {
    async fn resolve(&self, point: GeoPoint) -> Result<Option<Region>>;
}
