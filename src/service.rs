// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! News search orchestration
//!
//! Coordinates the provider, sanitization, rate limiting and the
//! paginated fetch-and-deduplicate loop.

use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::NewsConfig;
use crate::dedup::dedupe;
use crate::format::NewsFormatter;
use crate::naver::NaverNewsProvider;
use crate::provider::NewsProvider;
use crate::rate_limiter::FetchRateLimiter;
use crate::types::{Completion, NewsItem, SearchError, SearchOutcome, SortMode};

/// Main news search service.
///
/// Holds no per-search state: the candidate pool lives inside each call
/// frame, so concurrent searches on one service are independent and
/// nothing accumulates across calls.
pub struct NewsService {
    provider: Arc<dyn NewsProvider>,
    formatter: NewsFormatter,
    rate_limiter: FetchRateLimiter,
    config: NewsConfig,
}

impl NewsService {
    /// Create a service backed by the Naver provider.
    ///
    /// Fails fast with `NoCredentials` when the config is missing either
    /// credential, before any fetch is possible.
    pub fn new(config: NewsConfig) -> Result<Self, SearchError> {
        if !config.has_credentials() {
            return Err(SearchError::NoCredentials {
                provider: "naver".to_string(),
            });
        }

        let provider = Arc::new(NaverNewsProvider::with_timeout(
            config.client_id.clone(),
            config.client_secret.clone(),
            config.request_timeout_ms,
        ));

        Ok(Self::with_provider(provider, config))
    }

    /// Create a service over any provider implementation. Credential
    /// checks are left to the provider's `is_available`.
    pub fn with_provider(provider: Arc<dyn NewsProvider>, config: NewsConfig) -> Self {
        let rate_limiter = FetchRateLimiter::new(config.rate_limit_per_minute);

        Self {
            provider,
            formatter: NewsFormatter::new(),
            rate_limiter,
            config,
        }
    }

    /// Single-fetch search with deduplication opted out.
    ///
    /// Performs exactly one fetch of `count` items, sanitizes them and
    /// returns them unmodified: no pagination, no dedup pass.
    pub async fn search(
        &self,
        query: &str,
        count: usize,
        sort: SortMode,
    ) -> Result<Vec<NewsItem>, SearchError> {
        self.validate_request(query, count)?;
        self.rate_limiter.check()?;

        let raw = self.provider.fetch_page(query, count, 1, sort).await?;
        Ok(self.formatter.format_page(raw))
    }

    /// Paginated search returning `target_count` unique items.
    ///
    /// Fetches pages of `min(100, target_count * 2)` items, re-running
    /// the dedup pass over the full pool after every page, until the
    /// target is met, the provider runs out, or the pool reaches the
    /// fetch ceiling of `target_count * 3` raw items. The ceiling bounds
    /// upstream calls when duplicate density is high; hitting it returns
    /// fewer items than requested as a normal, non-error outcome (see
    /// `SearchOutcome::is_partial`).
    ///
    /// `threshold` falls back to the configured similarity threshold
    /// when `None`.
    pub async fn search_unique(
        &self,
        query: &str,
        target_count: usize,
        sort: SortMode,
        threshold: Option<f64>,
    ) -> Result<SearchOutcome, SearchError> {
        self.search_unique_cancellable(query, target_count, sort, threshold, &CancellationToken::new())
            .await
    }

    /// `search_unique` with caller-initiated cancellation.
    ///
    /// The token is checked before every fetch round; once it fires the
    /// call returns `Cancelled` and the accumulated pool is discarded.
    /// Cancellation between rounds never yields partial results.
    pub async fn search_unique_cancellable(
        &self,
        query: &str,
        target_count: usize,
        sort: SortMode,
        threshold: Option<f64>,
        cancel: &CancellationToken,
    ) -> Result<SearchOutcome, SearchError> {
        self.validate_request(query, target_count)?;

        let threshold = threshold.unwrap_or(self.config.similarity_threshold);
        let page_size = (target_count * 2).min(100);
        let fetch_ceiling = target_count * 3;
        let started = Instant::now();

        let mut pool: Vec<NewsItem> = Vec::new();
        let mut page_start: usize = 1;

        loop {
            if cancel.is_cancelled() {
                warn!(
                    "Search for '{}' cancelled before fetch at start {}",
                    query, page_start
                );
                return Err(SearchError::Cancelled);
            }

            self.rate_limiter.check()?;

            debug!(
                "Fetching {} items from start {} for '{}'",
                page_size, page_start, query
            );
            let page = self
                .provider
                .fetch_page(query, page_size, page_start, sort)
                .await?;
            let page_len = page.len();

            if page_len == 0 {
                let uniques = dedupe(&pool, threshold);
                return Ok(self.finish(
                    query,
                    target_count,
                    pool.len(),
                    uniques,
                    Completion::ProviderExhausted,
                    started,
                ));
            }

            pool.extend(self.formatter.format_page(page));

            let uniques = dedupe(&pool, threshold);

            if uniques.len() >= target_count {
                return Ok(self.finish(
                    query,
                    target_count,
                    pool.len(),
                    uniques,
                    Completion::Satisfied,
                    started,
                ));
            }

            if pool.len() >= fetch_ceiling {
                return Ok(self.finish(
                    query,
                    target_count,
                    pool.len(),
                    uniques,
                    Completion::FetchCeiling,
                    started,
                ));
            }

            if page_len < page_size {
                return Ok(self.finish(
                    query,
                    target_count,
                    pool.len(),
                    uniques,
                    Completion::ProviderExhausted,
                    started,
                ));
            }

            page_start += page_size;
        }
    }

    /// Name of the backing provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    fn validate_request(&self, query: &str, count: usize) -> Result<(), SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery {
                reason: "query is empty".to_string(),
            });
        }
        if count == 0 {
            return Err(SearchError::InvalidQuery {
                reason: "requested count is zero".to_string(),
            });
        }
        if !self.provider.is_available() {
            return Err(SearchError::NoCredentials {
                provider: self.provider.name().to_string(),
            });
        }
        Ok(())
    }

    fn finish(
        &self,
        query: &str,
        requested: usize,
        fetched: usize,
        mut uniques: Vec<NewsItem>,
        completion: Completion,
        started: Instant,
    ) -> SearchOutcome {
        // Duplicates are counted against the whole unique set, before
        // the requested-count truncation.
        let duplicates_removed = fetched - uniques.len();
        uniques.truncate(requested);

        let search_time_ms = started.elapsed().as_millis() as u64;
        info!(
            "Search complete: {} unique of {} fetched for '{}' in {}ms ({:?})",
            uniques.len(),
            fetched,
            query,
            search_time_ms,
            completion
        );

        SearchOutcome {
            query: query.to_string(),
            items: uniques,
            requested,
            fetched,
            duplicates_removed,
            completion,
            search_time_ms,
        }
    }
}
