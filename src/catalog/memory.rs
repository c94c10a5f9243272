//! In-memory business catalog.

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::BusinessCatalog;
use crate::models::{BusinessCategory, BusinessRecord};
use crate::proximity::filter_by_admin_area;

/// Catalog backed by an in-memory record list.
pub struct MemoryCatalog {
    records: Vec<BusinessRecord>,
}

impl MemoryCatalog {
    pub fn new(records: Vec<BusinessRecord>) -> Self {
        Self { records }
    }

    /// Load records from a JSON array document.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<BusinessRecord> =
            serde_json::from_str(json).context("Failed to parse business records")?;
        Ok(Self::new(records))
    }

    /// Catalog seeded with the sample data set.
    pub fn with_sample_data() -> Self {
        Self::new(super::sample_businesses())
    }

    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl BusinessCatalog for MemoryCatalog {
    async fn all(&self) -> Result<Vec<BusinessRecord>> {
        Ok(self.records.clone())
    }

    async fn by_id(&self, id: &str) -> Result<Option<BusinessRecord>> {
        Ok(self.records.iter().find(|b| b.id == id).cloned())
    }

    async fn by_category(&self, category: BusinessCategory) -> Result<Vec<BusinessRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|b| b.category == category)
            .cloned()
            .collect())
    }

    async fn by_city(&self, city: &str, state: &str) -> Result<Vec<BusinessRecord>> {
        Ok(filter_by_admin_area(city, state, &self.records)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<BusinessRecord>> {
        let term = query.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|b| {
                b.name.to_lowercase().contains(&term)
                    || b.description.to_lowercase().contains(&term)
                    || b.tags.iter().any(|t| t.to_lowercase().contains(&term))
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_by_id() {
        let catalog = MemoryCatalog::with_sample_data();
        let record = catalog.by_id("2").await.unwrap().unwrap();
        assert_eq!(record.name, "Maria's Catering");
        assert!(catalog.by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_by_category() {
        let catalog = MemoryCatalog::with_sample_data();
        let records = catalog
            .by_category(BusinessCategory::Automotive)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address.city, "Summit");
    }

    #[tokio::test]
    async fn test_by_city_ignores_case() {
        let catalog = MemoryCatalog::with_sample_data();
        let records = catalog.by_city("NUTLEY", "nj").await.unwrap();
        assert_eq!(records.len(), 4);
    }

    #[tokio::test]
    async fn test_search_covers_name_description_and_tags() {
        let catalog = MemoryCatalog::with_sample_data();

        // "catering" hits a name, "plumbing" a description, "towing" a tag
        assert_eq!(catalog.search("catering").await.unwrap().len(), 1);
        assert_eq!(catalog.search("plumbing").await.unwrap().len(), 1);
        let towing = catalog.search("towing").await.unwrap();
        assert_eq!(towing.len(), 1);
        assert_eq!(towing[0].id, "5");
    }

    #[tokio::test]
    async fn test_search_no_match() {
        let catalog = MemoryCatalog::with_sample_data();
        assert!(catalog.search("submarine base").await.unwrap().is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "id": "b1",
            "name": "Corner Bakery",
            "description": "Fresh bread daily",
            "category": "food_dining",
            "address": {
                "address": "1 Main St",
                "city": "Nutley",
                "state": "NJ",
                "postal_code": "07110",
                "country": "US"
            },
            "position": { "lat": 40.81, "lon": -74.15 },
            "rating": 4.2,
            "review_count": 12,
            "service_radius_miles": 5.0,
            "verified": true,
            "created_at": "2024-01-15T00:00:00Z",
            "updated_at": "2024-12-01T00:00:00Z"
        }]"#;

        let catalog = MemoryCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].id, "b1");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(MemoryCatalog::from_json("not json").is_err());
    }
}
