//! User-location acquisition.
//!
//! The device position and the reverse-geocode lookup are external
//! collaborators; this module composes them into a single awaitable fix so
//! downstream code never deals with platform callbacks or permissions.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::{GeoPoint, UserLocation};
use crate::region::RegionResolver;

/// Device-position collaborator.
///
/// `Ok(None)` means no position could be produced (permission denied, no
/// fix); `Err` is reserved for transport failures.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self) -> Result<Option<GeoPoint>>;
}

/// Outcome of a location acquisition.
#[derive(Debug, Clone)]
pub enum LocationFix {
    Acquired(UserLocation),
    Unavailable,
}

/// Composes a position source and a region resolver into a [`UserLocation`].
pub struct LocationService<P, R> {
    source: P,
    resolver: R,
}

impl<P: PositionSource, R: RegionResolver> LocationService<P, R> {
    pub fn new(source: P, resolver: R) -> Self {
        Self { source, resolver }
    }

    /// Acquire the current position and resolve its administrative area.
    ///
    /// A failed or unresolved region lookup still yields an acquired fix
    /// with `region: None`; only a missing position is `Unavailable`.
    pub async fn current_location(&self) -> Result<LocationFix> {
        let Some(point) = self.source.current_position().await? else {
            return Ok(LocationFix::Unavailable);
        };
        point.validate()?;

        let region = match self.resolver.resolve(point).await {
            Ok(region) => region,
            Err(e) => {
                warn!("Region resolution failed, continuing unresolved: {:#}", e);
                None
            }
        };

        debug!(
            "Acquired location ({}, {}), region resolved: {}",
            point.lat,
            point.lon,
            region.is_some()
        );

        Ok(LocationFix::Acquired(UserLocation::new(point, region)))
    }
}
