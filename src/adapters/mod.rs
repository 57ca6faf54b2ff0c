// Adapters layer: concrete implementations of the listing store port.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreStore;
pub use memory::InMemoryStore;

use crate::config::toml_config::{StoreBackend, StoreConfig};
use crate::core::ListingStore;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::sync::Arc;

/// 依設定建立對應的存儲實作
pub async fn build_store(config: &StoreConfig) -> Result<Arc<dyn ListingStore>> {
    match config.backend {
        StoreBackend::Firestore => {
            tracing::info!(
                "🔌 Using Firestore collection '{}' in project '{}'",
                config.collection,
                config.project_id
            );
            Ok(Arc::new(FirestoreStore::new(config.clone())))
        }
        StoreBackend::File => {
            let path = validate_required_field("store.listings_path", &config.listings_path)?;
            Ok(Arc::new(InMemoryStore::from_file(path).await?))
        }
    }
}
