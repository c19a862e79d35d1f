mod encyclopedia_client;
mod summary_lookup_service;

pub use encyclopedia_client::EncyclopediaClient;
pub use summary_lookup_service::SummaryLookupService;
