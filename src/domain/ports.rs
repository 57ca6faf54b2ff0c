use crate::domain::model::{Listing, ListingQuery};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// 車輛清單的外部存儲，只接受等值條件
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn query(&self, query: &ListingQuery) -> Result<Vec<Listing>>;
}

#[async_trait]
impl<T: ListingStore + ?Sized> ListingStore for Arc<T> {
    async fn query(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
        (**self).query(query).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn store_base_url(&self) -> &str;
    fn project_id(&self) -> &str;
    fn database_id(&self) -> &str;
    fn collection(&self) -> &str;
    fn access_token(&self) -> Option<&str>;
    fn request_timeout(&self) -> Option<Duration>;
}
