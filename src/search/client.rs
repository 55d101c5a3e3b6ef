use super::types::{SearchConfig, SearchError};
use super::TitleSearch;
use crate::sanitize::sanitize_title;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::Url;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, trace};

// Uppercase-only qualifiers such as " (TV)" or " (I)"
static QUALIFIER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r" \([A-Z]*?\)").unwrap());

// Everything up to the first parenthesized number: "Title (1999)"
static TITLE_YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.*?\([0-9]*\))").unwrap());

/// Title index client scraping the IMDb find page
pub struct ImdbClient {
    client: Client,
    base_url: Url,
    list_selector: Selector,
    result_selector: Selector,
}

impl ImdbClient {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| SearchError::InvalidUrl(e.to_string()))?;

        let list_selector = parse_selector(&config.list_selector)?;
        let result_selector = parse_selector(&config.result_selector)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            list_selector,
            result_selector,
        })
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    fn parse_results(&self, html: &str) -> Vec<String> {
        extract_titles(html, &self.list_selector, &self.result_selector)
    }
}

impl TitleSearch for ImdbClient {
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let url = self.search_url(query);

        debug!("Requesting: {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();

        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let body = response.text()?;
        let results = self.parse_results(&body);

        debug!(query, count = results.len(), "Search complete");

        Ok(results)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, SearchError> {
    Selector::parse(selector).map_err(|e| SearchError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Read candidate titles out of a find page, in page order
fn extract_titles(html: &str, list_selector: &Selector, result_selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);

    let list = match document.select(list_selector).next() {
        Some(list) => list,
        None => {
            trace!("No result list in page");
            return Vec::new();
        }
    };

    list.select(result_selector)
        .filter_map(|element| {
            let text: String = element.text().collect();
            let title = clean_title(&text);
            trace!(raw = %text.trim(), title = ?title, "Result entry");
            title
        })
        .map(|title| sanitize_title(&title))
        .filter(|title| !title.is_empty())
        .collect()
}

/// Reduce a raw result line to "Title (Year)".
///
/// Cells spanning several lines are folded onto one first. Returns `None`
/// for entries that carry no parenthesized number.
fn clean_title(raw: &str) -> Option<String> {
    let single_line = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let without_qualifiers = QUALIFIER_REGEX.replace_all(&single_line, "");
    let captures = TITLE_YEAR_REGEX.captures(&without_qualifiers)?;

    Some(captures[1].trim().to_string())
}
