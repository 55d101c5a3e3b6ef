mod client;
mod types;

pub use client::ImdbClient;
pub use types::{SearchConfig, SearchError};

use crate::parser::MediaFile;
use crate::progress::Progress;
use rayon::prelude::*;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::{info, warn};

/// Environment variable names for search configuration
pub const ENV_SEARCH_URL: &str = "MOVIE_RENAMER_SEARCH_URL";
pub const ENV_LIST_SELECTOR: &str = "MOVIE_RENAMER_LIST_SELECTOR";
pub const ENV_RESULT_SELECTOR: &str = "MOVIE_RENAMER_RESULT_SELECTOR";
pub const ENV_TIMEOUT: &str = "MOVIE_RENAMER_TIMEOUT";

/// A title index that can be queried by free text
pub trait TitleSearch {
    /// Candidate titles for `query`, best first
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError>;
}

/// Load search configuration from environment variables
///
/// Every variable is optional:
/// - `MOVIE_RENAMER_SEARCH_URL`: find page URL
/// - `MOVIE_RENAMER_LIST_SELECTOR`: CSS selector of the result list
/// - `MOVIE_RENAMER_RESULT_SELECTOR`: CSS selector of a result title
/// - `MOVIE_RENAMER_TIMEOUT`: request timeout in seconds
///
/// These can be set in a `.env` file in the working directory.
pub fn config_from_env() -> SearchConfig {
    let defaults = SearchConfig::default();

    SearchConfig {
        base_url: env::var(ENV_SEARCH_URL).unwrap_or(defaults.base_url),
        list_selector: env::var(ENV_LIST_SELECTOR).unwrap_or(defaults.list_selector),
        result_selector: env::var(ENV_RESULT_SELECTOR).unwrap_or(defaults.result_selector),
        timeout_secs: env::var(ENV_TIMEOUT)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs),
        user_agent: defaults.user_agent,
    }
}

/// Fill in `results` for every file.
///
/// Queries run in parallel; all of them finish before this returns. A failed
/// query leaves that file with no candidates.
pub fn collect_results<S: TitleSearch + Sync + ?Sized>(
    files: &mut [MediaFile],
    searcher: &S,
    progress: &mut Progress,
) {
    let total = files.len();
    let done = AtomicUsize::new(0);
    let progress = Mutex::new(progress);

    info!("Searching titles for {} files", total);

    files.par_iter_mut().for_each(|file| {
        let outcome = searcher.search(&file.name);

        if let Err(e) = &outcome {
            warn!(query = %file.name, error = %e, "Search failed, continuing without results");
        }

        let current = done.fetch_add(1, Ordering::Relaxed) + 1;
        if let Ok(mut progress) = progress.lock() {
            if let Err(e) = &outcome {
                progress.warn(&format!("Search failed for \"{}\": {}", file.name, e));
            }
            progress.search_progress(current, total);
        }

        file.results = outcome.unwrap_or_default();
    });

    if let Ok(mut progress) = progress.lock() {
        progress.search_complete(total);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file_name;
    use std::collections::HashMap;

    // Mutex to serialize env var tests (they share global state)
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    struct FakeIndex(HashMap<String, Vec<String>>);

    impl TitleSearch for FakeIndex {
        fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
            self.0
                .get(query)
                .cloned()
                .ok_or_else(|| SearchError::NetworkError("unreachable".to_string()))
        }
    }

    #[test]
    fn test_config_from_env_defaults() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        env::remove_var(ENV_SEARCH_URL);
        env::remove_var(ENV_LIST_SELECTOR);
        env::remove_var(ENV_RESULT_SELECTOR);
        env::remove_var(ENV_TIMEOUT);

        let config = config_from_env();

        assert_eq!(config.base_url, types::DEFAULT_SEARCH_URL);
        assert_eq!(config.list_selector, types::DEFAULT_LIST_SELECTOR);
        assert_eq!(config.result_selector, types::DEFAULT_RESULT_SELECTOR);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_from_env_with_values() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        env::set_var(ENV_SEARCH_URL, "http://localhost:8080/find");
        env::set_var(ENV_RESULT_SELECTOR, "a.title");
        env::set_var(ENV_TIMEOUT, "5");

        let config = config_from_env();

        assert_eq!(config.base_url, "http://localhost:8080/find");
        assert_eq!(config.result_selector, "a.title");
        assert_eq!(config.timeout_secs, 5);

        // Cleanup
        env::remove_var(ENV_SEARCH_URL);
        env::remove_var(ENV_RESULT_SELECTOR);
        env::remove_var(ENV_TIMEOUT);
    }

    #[test]
    fn test_collect_results_keeps_order_and_degrades() {
        let index = FakeIndex(HashMap::from([(
            "Movie Title".to_string(),
            vec!["Movie Title (2020)".to_string(), "Movie Title (1990)".to_string()],
        )]));

        let mut files = vec![
            parse_file_name("Movie.Title.2020.1080p.mkv"),
            parse_file_name("Unknown.Film.2001.720p.mkv"),
        ];
        let mut progress = Progress::silent();

        collect_results(&mut files, &index, &mut progress);

        assert_eq!(
            files[0].results,
            vec!["Movie Title (2020)".to_string(), "Movie Title (1990)".to_string()]
        );
        assert!(files[1].results.is_empty());
    }
}
