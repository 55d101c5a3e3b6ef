use thiserror::Error;

pub const DEFAULT_SEARCH_URL: &str = "https://www.imdb.com/find";
pub const DEFAULT_LIST_SELECTOR: &str = ".findList";
pub const DEFAULT_RESULT_SELECTOR: &str = ".result_text";

/// Search client configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Find page URL, the query is sent as the `q` parameter
    pub base_url: String,
    /// CSS selector of the result list; only the first match is read
    pub list_selector: String,
    /// CSS selector of one result's title text inside the list
    pub result_selector: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_URL.to_string(),
            list_selector: DEFAULT_LIST_SELECTOR.to_string(),
            result_selector: DEFAULT_RESULT_SELECTOR.to_string(),
            timeout_secs: 30,
            user_agent: format!("movie-renamer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur when querying the title index
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Search returned HTTP {0}")]
    HttpStatus(u16),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::NetworkError(err.to_string())
        }
    }
}
