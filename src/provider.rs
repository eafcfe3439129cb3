// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! News provider trait definition

use async_trait::async_trait;

use crate::types::{RawNewsItem, SearchError, SortMode};

/// Trait for implementing news search providers
///
/// A provider exposes the upstream search API one page at a time; the
/// pagination controller decides how many pages to pull. Implementations
/// must not retry or deduplicate on their own.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch one page of search results
    ///
    /// # Arguments
    /// * `query` - The search query string
    /// * `page_size` - Number of items to request for this page
    /// * `page_start` - 1-based index of the first item to return
    /// * `sort` - Recency or relevance ordering
    ///
    /// # Returns
    /// The raw items of this page, possibly fewer than `page_size` (or
    /// none) when the provider is running out of results.
    async fn fetch_page(
        &self,
        query: &str,
        page_size: usize,
        page_start: usize,
        sort: SortMode,
    ) -> Result<Vec<RawNewsItem>, SearchError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Check if the provider is usable (has credentials, etc.)
    fn is_available(&self) -> bool;
}
