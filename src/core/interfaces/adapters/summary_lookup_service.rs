use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::SearchResult;

#[async_trait]
pub trait SummaryLookupService: Send + Sync {
    async fn fetch_summary(&self, term: &str) -> Result<SearchResult>;
}
