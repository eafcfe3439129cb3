// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! News search with similarity-based deduplication
//!
//! Provides news search over provider APIs, enabling:
//! - Single-page search via `NewsService::search`
//! - Paged search that keeps fetching until a target count of unique
//!   items is met via `NewsService::search_unique`
//! - Article content fetching and summarization via `Enricher`
//!
//! Key features:
//! - Matching-blocks title and description similarity
//! - Greedy deduplication in recency order
//! - Bounded pagination with a fetch ceiling
//! - Rate limiting and cooperative cancellation

pub mod config;
pub mod content;
pub mod dedup;
pub mod enrich;
pub mod format;
pub mod keywords;
pub mod naver;
pub mod provider;
pub mod rate_limiter;
pub mod service;
pub mod similarity;
pub mod summarize;
pub mod types;

// Re-export commonly used types
pub use config::{ContentFetchConfig, NewsConfig, SummarizerConfig};
pub use dedup::{dedupe, duplicate_count};
pub use keywords::top_keywords;
pub use service::NewsService;
pub use similarity::similarity;
pub use types::{
    Completion, EnrichedSummary, NewsItem, RawNewsItem, SearchError, SearchOutcome, SortMode,
    Timestamp,
};

// Re-export provider and formatting types
pub use format::NewsFormatter;
pub use naver::NaverNewsProvider;
pub use provider::NewsProvider;
pub use rate_limiter::FetchRateLimiter;

// Re-export content and enrichment types
pub use content::{extract_article_text, ArticleContent, ArticleFetcher, FetchError};
pub use enrich::{EnrichError, Enricher};
pub use summarize::{DescriptionSummarizer, OpenAiSummarizer, SummarizeError, Summarizer, Summary};
