pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FirestoreStore, InMemoryStore};
pub use config::{AppConfig, StoreConfig};
pub use crate::core::{
    extractor::extract_preferences,
    recommender::{Recommendation, Recommender},
};
pub use domain::model::{Listing, ListingQuery, Preferences};
pub use domain::ports::ListingStore;
pub use utils::error::{ChatError, Result};
