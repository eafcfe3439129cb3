// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Textual similarity scoring for near-duplicate detection

/// Similarity ratio between two strings, 0.0 to 1.0.
///
/// Case-insensitive and symmetric. Computes 2.0 * M / T where M is the
/// total length of the longest matching blocks (recursive longest common
/// substring) and T is the combined length, the ratio behind sequence
/// matchers rather than token-set overlap. Catches near-identical titles
/// that differ by a few edited words; long strings sharing only scattered
/// words score low.
///
/// Operates on characters, not bytes, so multi-byte text compares
/// correctly.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.to_lowercase().chars().collect();
    let b_chars: Vec<char> = b.to_lowercase().chars().collect();

    // Block tie-breaking depends on argument order; canonicalize so the
    // score is symmetric.
    let (x, y) = if a_chars <= b_chars {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let total = x.len() + y.len();
    let matches = matching_chars(x, y);
    2.0 * matches as f64 / total as f64
}

/// Total characters covered by matching blocks: find the longest common
/// substring, then recurse on the pieces to its left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        if alo >= ahi || blo >= bhi {
            continue;
        }
        let (i, j, size) = longest_common_block(&a[alo..ahi], &b[blo..bhi]);
        if size == 0 {
            continue;
        }
        total += size;
        pending.push((alo, alo + i, blo, blo + j));
        pending.push((alo + i + size, ahi, blo + j + size, bhi));
    }

    total
}

/// Longest common substring via two-row DP. Returns (start in a,
/// start in b, length); first occurrence wins among equals.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let n = b.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];
    let mut best = (0, 0, 0);

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev[j] + 1;
                curr[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        std::mem::swap(&mut prev, &mut curr);
        curr.fill(0);
    }

    best
}
