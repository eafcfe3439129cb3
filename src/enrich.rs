// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article enrichment
//!
//! Fetches full article content for search results and attaches a
//! generated summary to each. Summaries are returned in a map keyed by
//! `NewsItem::key()`, so callers can join them back onto items even
//! after the result list has been re-sorted or filtered. Items whose
//! fetch or summarization fails are skipped, never the whole batch.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, info};

use crate::content::{ArticleFetcher, FetchError};
use crate::summarize::{SummarizeError, Summarizer};
use crate::types::{EnrichedSummary, NewsItem};

/// Errors that can occur while enriching a single item
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Fetching the article content failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Generating the summary failed
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

/// Enrichment pipeline: article fetcher plus a summarizer
pub struct Enricher {
    fetcher: ArticleFetcher,
    summarizer: Arc<dyn Summarizer>,
}

impl Enricher {
    /// Create a new enricher
    pub fn new(fetcher: ArticleFetcher, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            fetcher,
            summarizer,
        }
    }

    /// Fetch and summarize a single item
    pub async fn enrich_one(&self, item: &NewsItem) -> Result<EnrichedSummary, EnrichError> {
        let url = item.content_url();
        let content = self.fetcher.fetch(url).await?;
        let summary = self.summarizer.summarize(&content.text).await?;

        Ok(EnrichedSummary {
            key: item.key(),
            url: url.to_string(),
            summary: summary.summary,
            key_points: summary.key_points,
            content_chars: content.length,
        })
    }

    /// Enrich a batch of items concurrently. Failed items are logged
    /// and left out of the returned map.
    pub async fn enrich(&self, items: &[NewsItem]) -> HashMap<String, EnrichedSummary> {
        let futures = items.iter().map(|item| self.enrich_one(item));
        let results = join_all(futures).await;

        let enriched = index_by_key(items, results);
        info!(
            "Enriched {}/{} articles with {}",
            enriched.len(),
            items.len(),
            self.summarizer.name()
        );
        enriched
    }
}

/// Collect per-item results into a key-indexed map, dropping failures.
fn index_by_key(
    items: &[NewsItem],
    results: Vec<Result<EnrichedSummary, EnrichError>>,
) -> HashMap<String, EnrichedSummary> {
    let mut enriched = HashMap::new();
    for (item, result) in items.iter().zip(results) {
        match result {
            Ok(summary) => {
                enriched.insert(summary.key.clone(), summary);
            }
            Err(e) => {
                debug!("Skipping enrichment of '{}': {}", item.title, e);
            }
        }
    }
    enriched
}
