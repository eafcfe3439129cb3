//! HTTP article fetching with timeouts and URL safety checks
//!
//! Fetches article pages from result URLs for the enrichment path.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::extractor::extract_article_text;
use crate::config::ContentFetchConfig;

/// Pages yielding less extracted text than this are treated as failed:
/// below it the page almost certainly served a consent wall, a paywall
/// stub or a redirect shell rather than the story.
const MIN_ARTICLE_CHARS: usize = 100;

/// Fetched article content
#[derive(Debug, Clone)]
pub struct ArticleContent {
    /// URL the article was fetched from
    pub url: String,
    /// Page title if the document had one
    pub title: Option<String>,
    /// Extracted article text
    pub text: String,
    /// Characters of extracted text
    pub length: usize,
}

/// Article fetch error types
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(String),

    /// HTTP non-success status
    #[error("HTTP {0} for: {1}")]
    Status(u16, String),

    /// Too little content could be extracted
    #[error("No content extracted from: {0}")]
    NoContent(String),

    /// URL is unsafe (localhost, private IP, non-http scheme)
    #[error("Unsafe URL blocked: {0}")]
    UnsafeUrl(String),
}

/// Article fetcher with per-page timeout and redirect limit
pub struct ArticleFetcher {
    client: Client,
    config: ContentFetchConfig,
}

impl ArticleFetcher {
    /// Create a new article fetcher
    pub fn new(config: ContentFetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_per_page_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch and extract one article
    pub async fn fetch(&self, url: &str) -> Result<ArticleContent, FetchError> {
        if !Self::is_safe_url(url) {
            return Err(FetchError::UnsafeUrl(url.to_string()));
        }

        debug!("Fetching article from: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16(), url.to_string()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let text = extract_article_text(&html, self.config.max_chars);
        let length = text.chars().count();

        if length < MIN_ARTICLE_CHARS {
            return Err(FetchError::NoContent(url.to_string()));
        }

        let title = extract_title(&html);

        info!("Fetched {} chars from: {}", length, url);

        Ok(ArticleContent {
            url: url.to_string(),
            title,
            text,
            length,
        })
    }

    /// Check if a URL is safe to fetch (http/https, not localhost or a
    /// private/link-local address)
    pub fn is_safe_url(url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return false,
        };

        if !["http", "https"].contains(&parsed.scheme()) {
            return false;
        }

        if let Some(host) = parsed.host_str() {
            let host = host.to_lowercase();
            if host == "localhost"
                || host.starts_with("127.")
                || host.starts_with("0.0.0.0")
                || host.starts_with("192.168.")
                || host.starts_with("10.")
                || host.starts_with("169.254.")
            {
                return false;
            }
            // 172.16.0.0/12
            if let Some(rest) = host.strip_prefix("172.") {
                if let Some((octet, _)) = rest.split_once('.') {
                    if let Ok(n) = octet.parse::<u8>() {
                        if (16..=31).contains(&n) {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }
}

/// Extract the document title from HTML
fn extract_title(html: &str) -> Option<String> {
    use scraper::{Html, Selector};

    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}
