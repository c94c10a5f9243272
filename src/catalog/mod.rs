//! Business catalog collaborators.

pub mod memory;
pub mod sample;

pub use memory::MemoryCatalog;
pub use sample::sample_businesses;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{BusinessCategory, BusinessRecord};

/// Catalog of business listings.
///
/// The proximity operations accept records from any implementation; the
/// in-memory catalog backs development and tests.
#[async_trait]
pub trait BusinessCatalog: Send + Sync {
    /// All records, in catalog order.
    async fn all(&self) -> Result<Vec<BusinessRecord>>;

    async fn by_id(&self, id: &str) -> Result<Option<BusinessRecord>>;

    async fn by_category(&self, category: BusinessCategory) -> Result<Vec<BusinessRecord>>;

    /// Records in a city/state, matched case-insensitively, in catalog order.
    async fn by_city(&self, city: &str, state: &str) -> Result<Vec<BusinessRecord>>;

    /// Case-insensitive substring search over name, description and tags.
    async fn search(&self, query: &str) -> Result<Vec<BusinessRecord>>;
}
