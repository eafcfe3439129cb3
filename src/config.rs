// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for news search, content fetching and summarization

use std::env;

/// Configuration for the news search service
#[derive(Debug, Clone)]
pub struct NewsConfig {
    /// Naver application client id
    pub client_id: String,
    /// Naver application client secret
    pub client_secret: String,
    /// Similarity threshold for the dedup pass, in (0, 1]
    pub similarity_threshold: f64,
    /// Rate limit for upstream fetch rounds (requests per minute)
    pub rate_limit_per_minute: u32,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl NewsConfig {
    /// Load configuration from environment variables, reading a `.env`
    /// file first if one is present.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        Self {
            client_id: env::var("NAVER_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("NAVER_CLIENT_SECRET").unwrap_or_default(),
            similarity_threshold: env::var("NEWS_SIMILARITY_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.7),
            rate_limit_per_minute: env::var("NEWS_RATE_LIMIT_PER_MINUTE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            request_timeout_ms: env::var("NEWS_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_credentials() {
            return Err(
                "Naver credentials missing: set NAVER_CLIENT_ID and NAVER_CLIENT_SECRET"
                    .to_string(),
            );
        }
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err("similarity_threshold must be in (0, 1]".to_string());
        }
        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Check if both Naver credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            similarity_threshold: 0.7,
            rate_limit_per_minute: 60,
            request_timeout_ms: 10000,
        }
    }
}

/// Configuration for article content fetching
#[derive(Debug, Clone)]
pub struct ContentFetchConfig {
    /// Timeout per page fetch in seconds (default: 5)
    pub timeout_per_page_secs: u64,
    /// Maximum characters of article text to keep (default: 3000)
    pub max_chars: usize,
    /// User-Agent header sent with article fetches
    pub user_agent: String,
}

impl ContentFetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            timeout_per_page_secs: env::var("CONTENT_FETCH_TIMEOUT_PER_PAGE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            max_chars: env::var("CONTENT_FETCH_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            user_agent: env::var("CONTENT_FETCH_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_per_page_secs == 0 {
            return Err("timeout_per_page_secs must be at least 1".to_string());
        }
        if self.max_chars < 100 {
            return Err("max_chars must be at least 100".to_string());
        }
        Ok(())
    }
}

impl Default for ContentFetchConfig {
    fn default() -> Self {
        Self {
            timeout_per_page_secs: 5,
            max_chars: 3000,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

/// Configuration for the OpenAI-compatible summarizer
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// API key for the chat completions endpoint
    pub api_key: String,
    /// Base URL of the API (default: OpenAI)
    pub base_url: String,
    /// Model name (default: gpt-4o-mini)
    pub model: String,
    /// Upper bound on generated tokens (default: 500)
    pub max_tokens: u32,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl SummarizerConfig {
    /// Load configuration from environment variables, reading a `.env`
    /// file first if one is present.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        Self {
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: env::var("SUMMARY_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            max_tokens: env::var("SUMMARY_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            timeout_secs: env::var("SUMMARY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("OpenAI API key missing: set OPENAI_API_KEY".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            timeout_secs: 30,
        }
    }
}
