//! Sliding-window rate limiting.
//!
//! # Responsibilities
//! - Track accepted-call timestamps per guarded route
//! - Reject calls that would exceed the route's per-window budget
//!
//! # Design Decisions
//! - Prune-check-append runs as one critical section per call; under
//!   concurrent load the budget invariant requires the mutex
//! - A record exactly at `now - window` is evicted (strict retention)
//! - Rejected calls are not recorded

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::util::now_epoch_secs;

/// Sliding-window rate limiter keyed by route identifier.
pub struct RateLimiter {
    window: Duration,
    calls: Mutex<HashMap<String, VecDeque<f64>>>,
}

impl RateLimiter {
    /// Create a limiter with the given window length.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Check and record one call against `route`'s budget.
    ///
    /// Returns false, recording nothing, once `max_calls` accepted calls
    /// already sit inside the trailing window.
    pub fn allow(&self, route: &str, max_calls: u32) -> bool {
        self.allow_at(route, max_calls, now_epoch_secs())
    }

    fn allow_at(&self, route: &str, max_calls: u32, now: f64) -> bool {
        let cutoff = now - self.window.as_secs_f64();
        let mut calls = self.calls.lock().expect("rate limiter mutex poisoned");
        let records = calls.entry(route.to_string()).or_default();

        // Evict everything at or before the cutoff
        while let Some(&oldest) = records.front() {
            if oldest <= cutoff {
                records.pop_front();
            } else {
                break;
            }
        }

        if records.len() >= max_calls as usize {
            tracing::warn!(route = %route, budget = max_calls, "Rate limit exceeded");
            return false;
        }

        records.push_back(now);
        true
    }
}
