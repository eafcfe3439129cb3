// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Near-duplicate removal over fetched news items

use chrono::Utc;
use tracing::debug;

use crate::similarity::similarity;
use crate::types::NewsItem;

/// Remove near-duplicate items, keeping the most recent telling of each
/// story.
///
/// Items are sorted newest-first by their parsed publication date
/// (unparseable dates fall back to the time of the call), then walked
/// greedily: an item is kept unless its title or its description scores
/// at or above `threshold` against any already-kept item. The two field
/// checks are independent; either one marks a duplicate.
///
/// Returns the survivors in recency order, a subset of the input.
/// `threshold` is expected in (0, 1]; at 1.0 only case-insensitively
/// identical field values collapse, and values at or below zero collapse
/// everything into the single newest item.
pub fn dedupe(items: &[NewsItem], threshold: f64) -> Vec<NewsItem> {
    if items.is_empty() {
        return Vec::new();
    }

    // One fallback instant for the whole pass so items with unparseable
    // dates tie instead of racing the clock, keeping the sort stable.
    let now = Utc::now();
    let mut dated: Vec<(&NewsItem, chrono::DateTime<Utc>)> = items
        .iter()
        .map(|item| (item, item.timestamp(now).at))
        .collect();
    // Stable sort: equal timestamps preserve input order.
    dated.sort_by(|a, b| b.1.cmp(&a.1));

    let mut kept: Vec<NewsItem> = Vec::new();
    for (item, _) in dated {
        let is_duplicate = kept.iter().any(|seen| {
            similarity(&item.title, &seen.title) >= threshold
                || similarity(&item.description, &seen.description) >= threshold
        });
        if !is_duplicate {
            kept.push(item.clone());
        }
    }

    debug!(
        "Deduplicated {} items down to {} (threshold {})",
        items.len(),
        kept.len(),
        threshold
    );
    kept
}

/// Number of items `dedupe` would discard at this threshold.
pub fn duplicate_count(items: &[NewsItem], threshold: f64) -> usize {
    items.len() - dedupe(items, threshold).len()
}
