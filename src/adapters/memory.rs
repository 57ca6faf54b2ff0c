use crate::core::{Listing, ListingQuery, ListingStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Listings held in memory, typically loaded from a JSON file for local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    listings: Vec<Listing>,
}

impl InMemoryStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// 從 JSON 檔案載入（內容為車輛物件陣列）
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = tokio::fs::read(path.as_ref()).await?;
        let listings: Vec<Listing> = serde_json::from_slice(&data)?;
        tracing::info!(
            "📁 Loaded {} listing(s) from {}",
            listings.len(),
            path.as_ref().display()
        );
        Ok(Self::new(listings))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[async_trait]
impl ListingStore for InMemoryStore {
    async fn query(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
        Ok(self
            .listings
            .iter()
            .filter(|car| query.filters.iter().all(|f| car.matches(f)))
            .cloned()
            .collect())
    }
}
