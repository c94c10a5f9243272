//! In-memory bounding-box region index.
//!
//! A development and test double for [`RegionResolver`]: a short fixed table
//! of rectangular regions held in an R-tree. This is not a geocoder;
//! production callers inject a real provider behind the same trait.

use anyhow::Result;
use async_trait::async_trait;
use geo::{Contains, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};
use tracing::info;

use super::RegionResolver;
use crate::models::{GeoPoint, Region};

/// Wrapper for R-tree indexing of region bounding boxes
struct IndexedRegion {
    region: Region,
    rect: Rect<f64>,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedRegion {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedRegion {
    fn new(region: Region, rect: Rect<f64>) -> Self {
        Self {
            envelope: AABB::from_corners(
                [rect.min().x, rect.min().y],
                [rect.max().x, rect.max().y],
            ),
            region,
            rect,
        }
    }
}

/// Fixed-table region lookup backed by an R-tree.
pub struct StaticRegionIndex {
    tree: RTree<IndexedRegion>,
}

impl StaticRegionIndex {
    /// Build the index from (region, bounding rect) pairs.
    ///
    /// Rects are in lon/lat axis order (x = lon, y = lat).
    pub fn build(entries: Vec<(Region, Rect<f64>)>) -> Self {
        let indexed: Vec<IndexedRegion> = entries
            .into_iter()
            .map(|(region, rect)| IndexedRegion::new(region, rect))
            .collect();

        let tree = RTree::bulk_load(indexed);
        info!("Region index built with {} entries", tree.size());

        Self { tree }
    }

    /// The sample table used in development builds and tests.
    pub fn builtin() -> Self {
        let entries = vec![
            (
                Region {
                    city: "Nutley".to_string(),
                    state: "NJ".to_string(),
                    country: "US".to_string(),
                },
                Rect::new((-74.1576, 40.8076), (-74.1476, 40.8176)),
            ),
            (
                Region {
                    city: "New York".to_string(),
                    state: "NY".to_string(),
                    country: "US".to_string(),
                },
                Rect::new((-73.9951, 40.7489), (-73.9851, 40.7589)),
            ),
        ];
        Self::build(entries)
    }

    /// Find the region containing a point, if any.
    pub fn lookup(&self, point: GeoPoint) -> Option<&Region> {
        let p = Point::new(point.lon, point.lat);

        // Envelope candidates from the R-tree, then exact containment
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.lon, point.lat]))
            .find(|ir| ir.rect.contains(&p))
            .map(|ir| &ir.region)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[async_trait]
impl RegionResolver for StaticRegionIndex {
    async fn resolve(&self, point: GeoPoint) -> Result<Option<Region>> {
        Ok(self.lookup(point).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_hit() {
        let index = StaticRegionIndex::builtin();
        let region = index.lookup(GeoPoint::new(40.8126, -74.1526)).unwrap();
        assert_eq!(region.city, "Nutley");
        assert_eq!(region.state, "NJ");
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let index = StaticRegionIndex::builtin();
        // Los Angeles is not in the table
        assert!(index.lookup(GeoPoint::new(34.0522, -118.2437)).is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = StaticRegionIndex::build(vec![]);
        assert!(index.is_empty());
        assert!(index.lookup(GeoPoint::new(40.8126, -74.1526)).is_none());
    }

    #[tokio::test]
    async fn test_resolver_seam() {
        let index = StaticRegionIndex::builtin();
        let region = index
            .resolve(GeoPoint::new(40.7539, -73.9901))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(region.city, "New York");
    }
}
