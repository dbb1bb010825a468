//! Rate-limit counters reported by the Reddit API.
//!
//! Reddit reports its rate-limit window on every response through three
//! headers. The client only tracks them; it never throttles or retries on its
//! own - that policy belongs to the caller.

use crate::constants::{RATELIMIT_REMAINING_HEADER, RATELIMIT_RESET_HEADER, RATELIMIT_USED_HEADER};
use chrono::{DateTime, Duration, Utc};
use reqwest::header::HeaderMap;
use tracing::debug;

/// Snapshot of the server-reported rate-limit window.
///
/// Counters are overwritten wholesale whenever the corresponding header is
/// present and parseable; otherwise the previous value persists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Seconds until the current window resets
    pub reset: u64,
    /// Requests used in the current window
    pub used: u64,
    /// Requests remaining in the current window
    pub remaining: u64,
}

impl RateLimit {
    /// Overwrites counters from the rate-limit headers of a completed response.
    ///
    /// Header lookup is case-insensitive. A header that is absent or does not
    /// parse as an integer leaves its counter unchanged.
    pub fn update_from_headers(&mut self, headers: &HeaderMap) {
        if let Some(reset) = header_as_u64(headers, RATELIMIT_RESET_HEADER) {
            self.reset = reset;
        }
        if let Some(used) = header_as_u64(headers, RATELIMIT_USED_HEADER) {
            self.used = used;
        }
        if let Some(remaining) = header_as_u64(headers, RATELIMIT_REMAINING_HEADER) {
            self.remaining = remaining;
        }
        debug!(
            "rate limit: used={} remaining={} reset={}s",
            self.used, self.remaining, self.reset
        );
    }

    /// Absolute instant at which the current window resets, computed from the
    /// last reported `reset` seconds.
    pub fn reset_at(&self) -> DateTime<Utc> {
        Utc::now() + Duration::seconds(self.reset as i64)
    }
}

fn header_as_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
}
