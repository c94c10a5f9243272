//! Proximity query facade over a business catalog.

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::BusinessCatalog;
use crate::models::{RankedBusiness, UserLocation};
use crate::proximity::{rank_by_proximity, DEFAULT_RADIUS_MILES};

/// Query tuning knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Radius applied when the caller does not pass one
    #[serde(default = "default_radius")]
    pub default_radius_miles: f64,

    /// Cap on returned results
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_MILES
}

fn default_max_results() -> usize {
    40
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_radius_miles: default_radius(),
            max_results: default_max_results(),
        }
    }
}

/// Runs ranked proximity queries against a catalog.
pub struct QueryService<C> {
    catalog: C,
    config: QueryConfig,
}

impl<C: BusinessCatalog> QueryService<C> {
    pub fn new(catalog: C, config: QueryConfig) -> Self {
        Self { catalog, config }
    }

    /// Businesses near `origin` within the configured default radius.
    pub async fn nearby(&self, origin: &UserLocation) -> Result<Vec<RankedBusiness>> {
        self.nearby_within(origin, self.config.default_radius_miles)
            .await
    }

    /// Businesses near `origin` within `radius_miles`, capped at the
    /// configured result limit.
    pub async fn nearby_within(
        &self,
        origin: &UserLocation,
        radius_miles: f64,
    ) -> Result<Vec<RankedBusiness>> {
        let records = self.catalog.all().await?;
        let mut ranked = rank_by_proximity(origin, &records, radius_miles)?;
        ranked.truncate(self.config.max_results);

        debug!(
            "Nearby query at ({}, {}): {} results within {} miles",
            origin.point.lat,
            origin.point.lon,
            ranked.len(),
            radius_miles
        );

        Ok(ranked)
    }
}
