// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Frequency-based keyword extraction over result titles

use std::collections::HashMap;

use crate::types::NewsItem;

/// The `k` most frequent title tokens across a result set.
///
/// Titles are split on whitespace and tokens of a single character or
/// less are dropped; everything else counts verbatim, case-sensitively.
/// Ties are broken by first encounter, so the order is deterministic for
/// a given item order. A coarse topic summary, not an NLP pipeline: no
/// stemming, no stop-word list.
pub fn top_keywords(items: &[NewsItem], k: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for item in items {
        for token in item.title.split_whitespace() {
            if token.chars().count() <= 1 {
                continue;
            }
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                first_seen.push(token);
            }
            *count += 1;
        }
    }

    // Stable sort over encounter order, so equal counts keep it.
    let mut ranked = first_seen;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));

    ranked.into_iter().take(k).map(String::from).collect()
}
