pub const APPLICATION_TITLE: &str = "Fast Search";
pub const WARNING_WINDOW_TITLE: &str = "Warning";

pub const SETTINGS_DIRECTORY_NAME: &str = "fast-search";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_LANGUAGE: &str = "pt";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const WIKIPEDIA_API_URL_TEMPLATE: &str = "https://{}.wikipedia.org/w/api.php";
pub const HTTP_USER_AGENT: &str = concat!(
    "fast-search/",
    env!("CARGO_PKG_VERSION"),
    " (desktop encyclopedia lookup)"
);

pub const MAIN_WINDOW_WIDTH: f32 = 700.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 500.0;
pub const WARNING_WINDOW_WIDTH: f32 = 360.0;
pub const WARNING_WINDOW_HEIGHT: f32 = 160.0;

pub const STATUS_READY: &str = "Ready";
pub const STATUS_SEARCHING: &str = "Searching...";

pub const USER_MESSAGE_EMPTY_TERM: &str = "Please enter a term to search.";
pub const SEARCH_INPUT_PLACEHOLDER: &str = "Type a term and press Enter...";
