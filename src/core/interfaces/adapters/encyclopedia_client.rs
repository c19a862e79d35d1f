use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::PageLookup;

#[async_trait]
pub trait EncyclopediaClient: Send + Sync {
    async fn lookup_page(&self, term: &str) -> Result<PageLookup>;
}
