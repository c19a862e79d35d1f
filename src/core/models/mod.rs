mod encyclopedia_page;
mod search_result;
mod user_settings;

pub use encyclopedia_page::{EncyclopediaPage, PageLookup};
pub use search_result::SearchResult;
pub use user_settings::{ThemeMode, UserSettings};
