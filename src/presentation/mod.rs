pub mod app_theme;
mod search_view;
mod warning_view;

pub use search_view::{SearchView, SearchViewMessage};
pub use warning_view::{WarningMessage, WarningView};
