// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Naver News Search API provider
//!
//! Implements news search using the Naver open API. Results arrive in
//! pages of at most 100 items, newest-first or most-relevant-first, with
//! query-term highlights wrapped in <b> tags.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::provider::NewsProvider;
use crate::types::{RawNewsItem, SearchError, SortMode};

const NAVER_API_URL: &str = "https://openapi.naver.com/v1/search/news.json";

/// Largest page the API will serve
const MAX_PAGE_SIZE: usize = 100;

/// Naver News Search API provider
pub struct NaverNewsProvider {
    client_id: String,
    client_secret: String,
    client: Client,
    timeout_ms: u64,
}

impl NaverNewsProvider {
    /// Create a new Naver news provider with the default 10s timeout
    ///
    /// # Arguments
    /// * `client_id` - Naver application client id
    /// * `client_secret` - Naver application client secret
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::with_timeout(client_id, client_secret, 10_000)
    }

    /// Create a provider with an explicit per-request timeout
    pub fn with_timeout(client_id: String, client_secret: String, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client_id,
            client_secret,
            client,
            timeout_ms,
        }
    }
}

#[async_trait]
impl NewsProvider for NaverNewsProvider {
    async fn fetch_page(
        &self,
        query: &str,
        page_size: usize,
        page_start: usize,
        sort: SortMode,
    ) -> Result<Vec<RawNewsItem>, SearchError> {
        let display = page_size.clamp(1, MAX_PAGE_SIZE).to_string();
        let start = page_start.max(1).to_string();

        let response = self
            .client
            .get(NAVER_API_URL)
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .query(&[
                ("query", query),
                ("display", display.as_str()),
                ("start", start.as_str()),
                ("sort", sort.as_param()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    SearchError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if status == 429 {
            return Err(SearchError::RateLimited {
                retry_after_secs: 60,
            });
        }

        if status == 401 || status == 403 {
            return Err(SearchError::NoCredentials {
                provider: "naver".to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: NaverResponse = response.json().await.map_err(|e| SearchError::ApiError {
            status: 0,
            message: format!("JSON parse error: {}", e),
        })?;

        debug!(
            "Fetched {} items from start {} for '{}'",
            data.items.len(),
            start,
            query
        );

        Ok(data.items)
    }

    fn name(&self) -> &'static str {
        "naver"
    }

    fn is_available(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

#[derive(Debug, serde::Deserialize)]
struct NaverResponse {
    #[serde(default)]
    items: Vec<RawNewsItem>,
}
