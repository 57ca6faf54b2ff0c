use std::sync::Arc;

use crate::core::recommender::Recommender;
use crate::core::ListingStore;

/// Shared state for all handlers. Read-only after startup.
pub struct AppState {
    pub recommender: Recommender<Arc<dyn ListingStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ListingStore>, max_results: usize) -> Arc<Self> {
        Arc::new(Self {
            recommender: Recommender::with_max_results(store, max_results),
        })
    }
}
