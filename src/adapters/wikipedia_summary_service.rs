use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::core::interfaces::adapters::{EncyclopediaClient, SummaryLookupService};
use crate::core::models::{PageLookup, SearchResult};

pub struct WikipediaSummaryService {
    encyclopedia_client: Arc<dyn EncyclopediaClient>,
}

impl WikipediaSummaryService {
    pub fn new(encyclopedia_client: Arc<dyn EncyclopediaClient>) -> Self {
        Self {
            encyclopedia_client,
        }
    }
}

#[async_trait]
impl SummaryLookupService for WikipediaSummaryService {
    async fn fetch_summary(&self, term: &str) -> Result<SearchResult> {
        log::info!("[WIKIPEDIA] Fetching summary for '{}'", term);

        let result = match self.encyclopedia_client.lookup_page(term).await? {
            PageLookup::Found(page) => {
                let resolved_elsewhere = page.title.to_lowercase() != term.trim().to_lowercase();
                let note = format!("Showing the closest match for '{}'.", term);
                let result = SearchResult::found(page.title, page.url, page.summary);
                if resolved_elsewhere {
                    result.with_additional_info(note)
                } else {
                    result
                }
            }
            PageLookup::Ambiguous { options } => {
                log::info!(
                    "[WIKIPEDIA] '{}' is ambiguous ({} options)",
                    term,
                    options.len()
                );
                SearchResult::ambiguous(term, &options)
            }
            PageLookup::Missing => {
                log::info!("[WIKIPEDIA] No page found for '{}'", term);
                SearchResult::not_found(term)
            }
        };

        Ok(result)
    }
}
