mod mediawiki_client;
mod wikipedia_summary_service;

pub use mediawiki_client::MediaWikiClient;
pub use wikipedia_summary_service::WikipediaSummaryService;
