// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rate limiting for upstream fetch rounds

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovRateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::types::SearchError;

/// Local rate limiter consulted before every page fetch. One paginated
/// search can issue several upstream calls, so the limit applies per
/// fetch round, not per search.
pub struct FetchRateLimiter {
    limiter: Arc<GovRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    requests_per_minute: u32,
}

impl FetchRateLimiter {
    /// Create a new rate limiter
    ///
    /// # Arguments
    /// * `requests_per_minute` - Maximum fetch rounds allowed per minute;
    ///   zero falls back to the default of 60
    pub fn new(requests_per_minute: u32) -> Self {
        let rpm = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::new(60).unwrap());
        let quota = Quota::per_minute(rpm);
        let limiter = Arc::new(GovRateLimiter::direct(quota));

        Self {
            limiter,
            requests_per_minute,
        }
    }

    /// Check if a fetch round is allowed right now
    ///
    /// Returns Ok(()) if allowed, or SearchError::RateLimited if not
    pub fn check(&self) -> Result<(), SearchError> {
        match self.limiter.check() {
            Ok(_) => Ok(()),
            Err(_) => Err(SearchError::RateLimited {
                retry_after_secs: 60,
            }),
        }
    }

    /// Get the configured requests per minute
    pub fn requests_per_minute(&self) -> u32 {
        self.requests_per_minute
    }
}
