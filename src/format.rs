// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sanitization of provider-sourced text fields

use regex::Regex;

use crate::types::{NewsItem, RawNewsItem};

/// Strips markup from raw items before they enter the dedup pipeline.
/// Holds its tag pattern pre-compiled; construct once and reuse.
#[derive(Clone)]
pub struct NewsFormatter {
    tag_pattern: Regex,
}

impl NewsFormatter {
    pub fn new() -> Self {
        Self {
            // Matches the <b> highlights the provider wraps around query
            // terms, and any other tag.
            tag_pattern: Regex::new(r"<[^>]*>").unwrap(),
        }
    }

    /// Sanitize one raw item. Tags are stripped and basic entities
    /// decoded in `title` and `description` only; `link`, `originallink`
    /// and `pubDate` pass through unchanged. Tolerant: malformed markup
    /// degrades to best-effort stripped text, never an error.
    pub fn format(&self, raw: RawNewsItem) -> NewsItem {
        NewsItem {
            title: self.clean_text(&raw.title),
            description: self.clean_text(&raw.description),
            link: raw.link,
            original_link: raw.originallink,
            pub_date: raw.pub_date,
        }
    }

    /// Sanitize a whole page of raw items.
    pub fn format_page(&self, page: Vec<RawNewsItem>) -> Vec<NewsItem> {
        page.into_iter().map(|raw| self.format(raw)).collect()
    }

    fn clean_text(&self, text: &str) -> String {
        let stripped = self.tag_pattern.replace_all(text, "");
        decode_entities(&stripped)
    }
}

impl Default for NewsFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the handful of entities the provider emits. Runs after tag
/// stripping so escaped angle brackets come out as literal text rather
/// than being treated as markup.
fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .trim()
        .to_string()
}
