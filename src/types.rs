// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for news search and deduplication

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// A news item exactly as the search provider returns it, before any
/// sanitization. Field names follow the provider's wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNewsItem {
    /// Title, may contain markup
    #[serde(default)]
    pub title: String,
    /// Description/snippet, may contain markup
    #[serde(default)]
    pub description: String,
    /// Provider-hosted URL for the article
    #[serde(default)]
    pub link: String,
    /// Publisher URL, empty if the provider omitted it
    #[serde(default)]
    pub originallink: String,
    /// Publication date string, format varies by source
    #[serde(default, rename = "pubDate")]
    pub pub_date: String,
}

/// A sanitized news item. Title and description are markup-free once the
/// formatter has run; the remaining fields pass through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Article title, markup-free
    pub title: String,
    /// Article description, markup-free
    pub description: String,
    /// Provider-hosted URL for the article
    pub link: String,
    /// Publisher URL, may be empty
    #[serde(default)]
    pub original_link: String,
    /// Raw publication date string as the provider sent it
    #[serde(default)]
    pub pub_date: String,
}

impl NewsItem {
    /// Best-effort publication timestamp. Tries RFC 2822 (the provider's
    /// documented format) then RFC 3339; on failure returns the supplied
    /// fallback instant with `parsed` set to false. Never fails.
    pub fn timestamp(&self, fallback: DateTime<Utc>) -> Timestamp {
        match DateTime::parse_from_rfc2822(&self.pub_date)
            .or_else(|_| DateTime::parse_from_rfc3339(&self.pub_date))
        {
            Ok(dt) => Timestamp {
                at: dt.with_timezone(&Utc),
                parsed: true,
            },
            Err(_) => Timestamp {
                at: fallback,
                parsed: false,
            },
        }
    }

    /// Stable identity for enrichment joins: hex-encoded SHA-256 prefix of
    /// link + title. Survives re-sorting and list growth, unlike a
    /// positional index.
    pub fn key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.link.as_bytes());
        hasher.update(self.title.as_bytes());
        let digest = hasher.finalize();
        hex::encode(&digest[..8])
    }

    /// URL to fetch article content from: the publisher link when the
    /// provider supplied one, otherwise the provider-hosted link.
    pub fn content_url(&self) -> &str {
        if self.original_link.is_empty() {
            &self.link
        } else {
            &self.original_link
        }
    }
}

/// A derived publication instant plus whether it came from a successful
/// parse or from the fallback. Lets callers distinguish "confidently
/// recent" from "unknown, defaulted to now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// The instant used for recency ordering
    pub at: DateTime<Utc>,
    /// True if `at` was parsed from the item's date string
    pub parsed: bool,
}

/// Sort order requested from the search provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Most recent first
    Date,
    /// Most relevant first
    Relevance,
}

impl SortMode {
    /// Wire value for the provider's `sort` parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortMode::Date => "date",
            SortMode::Relevance => "sim",
        }
    }
}

/// How a `search_unique` call finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Completion {
    /// Enough unique items were found to satisfy the requested count
    Satisfied,
    /// The provider ran out of results before the target was reached
    ProviderExhausted,
    /// The fetch ceiling was reached before the target was reached
    FetchCeiling,
}

/// Result of a deduplicated search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// The original search query
    pub query: String,
    /// Unique items in recency order, at most `requested` of them
    pub items: Vec<NewsItem>,
    /// Number of unique items the caller asked for
    pub requested: usize,
    /// Total raw items fetched from the provider across all pages
    pub fetched: usize,
    /// Near-duplicates discarded from the fetched pool
    pub duplicates_removed: usize,
    /// How the search finished
    pub completion: Completion,
    /// Time taken for the search in milliseconds
    pub search_time_ms: u64,
}

impl SearchOutcome {
    /// True when fewer unique items were found than requested. A partial
    /// outcome is a successful search, not an error.
    pub fn is_partial(&self) -> bool {
        self.items.len() < self.requested
    }
}

/// Generated summary attached to a news item during enrichment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSummary {
    /// Stable item key this summary belongs to (`NewsItem::key`)
    pub key: String,
    /// URL the article content was fetched from
    pub url: String,
    /// Generated summary text
    pub summary: String,
    /// Key points extracted alongside the summary, may be empty
    pub key_points: Vec<String>,
    /// Characters of article content the summary was generated from
    pub content_chars: usize,
}

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Rate limited, either locally or by the provider
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying
        retry_after_secs: u64,
    },

    /// API error from the search provider
    #[error("News API error: {status} - {message}")]
    ApiError {
        /// HTTP status code, 0 for connection-level failures
        status: u16,
        /// Error message
        message: String,
    },

    /// Search request timed out
    #[error("Search timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Credentials missing or rejected by the provider
    #[error("No credentials configured for {provider}")]
    NoCredentials {
        /// Name of the provider missing credentials
        provider: String,
    },

    /// Invalid search request
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Reason the request is invalid
        reason: String,
    },

    /// Caller cancelled the search between fetch rounds
    #[error("Search cancelled")]
    Cancelled,
}
