//! Article content fetching for the enrichment path
//!
//! Fetches full article text from result URLs so summaries can be
//! generated from the story itself instead of the provider snippet.
//!
//! ## Architecture
//!
//! ```text
//! NewsItem (URL) → ArticleFetcher → HTML → extract_article_text → Clean Text
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let config = ContentFetchConfig::from_env();
//! let fetcher = ArticleFetcher::new(config);
//!
//! let article = fetcher.fetch("https://news.example.com/story").await?;
//! println!("{} chars", article.length);
//! ```

pub mod extractor;
pub mod fetcher;

pub use extractor::extract_article_text;
pub use fetcher::{ArticleContent, ArticleFetcher, FetchError};
