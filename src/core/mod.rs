pub mod extractor;
pub mod recommender;
pub mod responder;

pub use crate::domain::model::{FieldFilter, Listing, ListingQuery, Preferences};
pub use crate::domain::ports::{ConfigProvider, ListingStore};
pub use crate::utils::error::Result;
