use crate::core::extractor::extract_preferences;
use crate::core::responder::{
    build_query, fallback_header, filter_by_price, matches_header, render_response,
    NO_LISTINGS_MESSAGE,
};
use crate::core::ListingStore;
use crate::domain::model::{Listing, Preferences};
use crate::utils::error::{ChatError, Result};

pub const DEFAULT_MAX_RESULTS: usize = 2;

/// Outcome of one chat message, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// 存儲對這些條件沒有回傳任何車
    NoListings,
    /// `total` 台符合價格上限，`shown` 為前幾台
    Matches { total: usize, shown: Vec<Listing> },
    /// 沒有車符合價格上限，改列出未過濾的前幾台
    Fallback { shown: Vec<Listing> },
}

impl Recommendation {
    pub fn render(&self, max_results: usize) -> String {
        match self {
            Recommendation::NoListings => NO_LISTINGS_MESSAGE.to_string(),
            Recommendation::Matches { total, shown } => {
                render_response(&matches_header(*total, max_results), shown)
            }
            Recommendation::Fallback { shown } => {
                render_response(&fallback_header(max_results), shown)
            }
        }
    }
}

pub struct Recommender<S: ListingStore> {
    store: S,
    max_results: usize,
}

impl<S: ListingStore> Recommender<S> {
    pub fn new(store: S) -> Self {
        Self::with_max_results(store, DEFAULT_MAX_RESULTS)
    }

    pub fn with_max_results(store: S, max_results: usize) -> Self {
        Self { store, max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub async fn recommend(&self, preferences: &Preferences) -> Result<Recommendation> {
        let query = build_query(preferences);
        tracing::debug!(filters = query.filters.len(), "querying listing store");

        let cars = self.store.query(&query).await.map_err(|e| {
            tracing::error!("❌ Error querying listing store: {}", e);
            match e {
                ChatError::QueryError { .. } => e,
                other => ChatError::QueryError {
                    message: other.to_string(),
                },
            }
        })?;

        if cars.is_empty() {
            tracing::info!("No listings returned for {:?}", query.filters);
            return Ok(Recommendation::NoListings);
        }

        let filtered = filter_by_price(&cars, preferences);
        tracing::debug!(
            returned = cars.len(),
            within_price = filtered.len(),
            "applied price ceiling"
        );

        if filtered.is_empty() {
            return Ok(Recommendation::Fallback {
                shown: cars.iter().take(self.max_results).cloned().collect(),
            });
        }

        Ok(Recommendation::Matches {
            total: filtered.len(),
            shown: filtered
                .into_iter()
                .take(self.max_results)
                .cloned()
                .collect(),
        })
    }

    /// 完整處理一則訊息：抽取條件、查詢、產生回覆文字
    pub async fn respond(&self, message: &str) -> Result<String> {
        let preferences = extract_preferences(message);
        let recommendation = self.recommend(&preferences).await?;
        Ok(recommendation.render(self.max_results))
    }
}
