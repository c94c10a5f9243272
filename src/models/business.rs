//! Business listing records supplied by the catalog collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::GeoPoint;

/// Business category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessCategory {
    HomeServices,
    FoodDining,
    HealthWellness,
    Technology,
    Beauty,
    Automotive,
    Retail,
    ProfessionalServices,
    Education,
    Entertainment,
    Fitness,
    PetServices,
}

impl std::fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BusinessCategory::HomeServices => "Home Services",
            BusinessCategory::FoodDining => "Food & Dining",
            BusinessCategory::HealthWellness => "Health & Wellness",
            BusinessCategory::Technology => "Technology",
            BusinessCategory::Beauty => "Beauty",
            BusinessCategory::Automotive => "Automotive",
            BusinessCategory::Retail => "Retail",
            BusinessCategory::ProfessionalServices => "Professional Services",
            BusinessCategory::Education => "Education",
            BusinessCategory::Entertainment => "Entertainment",
            BusinessCategory::Fitness => "Fitness",
            BusinessCategory::PetServices => "Pet Services",
        };
        write!(f, "{}", label)
    }
}

/// Street address components
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreetAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Contact details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A business listing.
///
/// Owned by the catalog collaborator; the proximity operations treat it as
/// read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// Unique identifier
    pub id: String,

    pub name: String,

    pub description: String,

    pub category: BusinessCategory,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Administrative location
    pub address: StreetAddress,

    /// Center point for distance queries
    pub position: GeoPoint,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,

    /// Average rating, 0.0 to 5.0
    pub rating: f64,

    pub review_count: u32,

    /// Maximum distance in miles the business serves
    pub service_radius_miles: f64,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    pub verified: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BusinessRecord {
    /// Create a new record with minimal required fields
    pub fn new(
        id: &str,
        name: &str,
        category: BusinessCategory,
        address: StreetAddress,
        position: GeoPoint,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            category,
            subcategory: None,
            address,
            position,
            contact: None,
            rating: 0.0,
            review_count: 0,
            service_radius_miles: 10.0,
            tags: BTreeSet::new(),
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_tag(&mut self, tag: &str) {
        self.tags.insert(tag.to_string());
    }
}

/// A business annotated with its distance from a query origin.
///
/// Derived per query, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RankedBusiness {
    pub business: BusinessRecord,

    /// Great-circle distance from the query origin, rounded to one decimal
    pub distance_miles: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(BusinessCategory::FoodDining.to_string(), "Food & Dining");
        assert_eq!(BusinessCategory::PetServices.to_string(), "Pet Services");
    }

    #[test]
    fn test_record_deserializes_without_tags() {
        let json = r#"{
            "id": "b1",
            "name": "Corner Bakery",
            "description": "",
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
            "verified": false,
            "created_at": "2024-01-15T00:00:00Z",
            "updated_at": "2024-12-01T00:00:00Z"
        }"#;

        let record: BusinessRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, BusinessCategory::FoodDining);
        assert!(record.tags.is_empty());
        assert!(record.contact.is_none());
    }
}
