// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article summarization
//!
//! A `Summarizer` turns article text into a short summary plus optional
//! key points. `OpenAiSummarizer` calls an OpenAI-compatible chat
//! completions endpoint; `DescriptionSummarizer` is the zero-dependency
//! fallback that just truncates the text it is given.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::SummarizerConfig;

/// Character budget of the trivial fallback summary
const SIMPLE_SUMMARY_CHARS: usize = 100;

const SYSTEM_PROMPT: &str = "You are an expert news analyst. \
Respond in exactly this format:\n\n\
[Summary]\n(3-5 sentences covering the core of the story)\n\n\
[Key points]\n- (key point 1)\n- (key point 2)\n- (key point 3)";

/// A generated summary with optional key points
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Summary text
    pub summary: String,
    /// Key points, empty when the model returned none
    pub key_points: Vec<String>,
}

/// Errors that can occur during summarization
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// API error from the summarization endpoint
    #[error("Summarization API error: {status} - {message}")]
    Api {
        /// HTTP status code, 0 for connection-level failures
        status: u16,
        /// Error message
        message: String,
    },

    /// Request timed out
    #[error("Summarization timeout after {timeout_secs}s")]
    Timeout {
        /// Timeout duration in seconds
        timeout_secs: u64,
    },

    /// The endpoint returned no usable content
    #[error("Empty response from summarization API")]
    EmptyResponse,

    /// No API key configured
    #[error("No API key configured for summarization")]
    MissingCredentials,
}

/// Trait for implementing summarizers
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize a piece of article text
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError>;

    /// Get the summarizer name for logging
    fn name(&self) -> &'static str;
}

/// Summarizer backed by an OpenAI-compatible chat completions API
pub struct OpenAiSummarizer {
    config: SummarizerConfig,
    client: Client,
}

impl OpenAiSummarizer {
    /// Create a new summarizer from configuration
    pub fn new(config: SummarizerConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        if self.config.api_key.is_empty() {
            return Err(SummarizeError::MissingCredentials);
        }

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Analyze this news article:\n\n{}", text),
                },
            ],
            temperature: 0.3,
            max_tokens: self.config.max_tokens,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        debug!("Requesting summary from {} ({})", url, self.config.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SummarizeError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    SummarizeError::Api {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: ChatResponse = response.json().await.map_err(|e| SummarizeError::Api {
            status: 0,
            message: format!("JSON parse error: {}", e),
        })?;

        let content = data
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(SummarizeError::EmptyResponse);
        }

        Ok(parse_summary(content.trim()))
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Trivial summarizer: the first 100 characters of the given text.
/// Used when no API key is configured; never fails.
pub struct DescriptionSummarizer;

#[async_trait]
impl Summarizer for DescriptionSummarizer {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let summary = if text.chars().count() > SIMPLE_SUMMARY_CHARS {
            let cut: String = text.chars().take(SIMPLE_SUMMARY_CHARS).collect();
            format!("{}...", cut)
        } else {
            text.to_string()
        };

        Ok(Summary {
            summary,
            key_points: Vec::new(),
        })
    }

    fn name(&self) -> &'static str {
        "description"
    }
}

/// Parse the model response into summary and key points. Tolerant: a
/// response with no key-points block yields an empty list, never an
/// error.
fn parse_summary(content: &str) -> Summary {
    let (summary_part, points_part) = match content.split_once("[Key points]") {
        Some((before, after)) => (before, Some(after)),
        None => (content, None),
    };

    let summary = summary_part.replace("[Summary]", "").trim().to_string();

    let key_points = points_part
        .map(|points| {
            points
                .lines()
                .map(str::trim)
                .filter(|line| line.starts_with('-'))
                .map(|line| line.trim_start_matches('-').trim().to_string())
                .filter(|line| !line.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Summary {
        summary,
        key_points,
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}
