//! Authenticated session for Reddit API access.

use crate::session::rate_limit::RateLimit;
use reqwest::header::HeaderMap;
use std::sync::{Arc, Mutex};

/// Session information for Reddit API authentication.
///
/// Holds the OAuth access token and the rate-limit counters reported by the
/// server. The token is immutable for the lifetime of the session; only the
/// rate-limit counters mutate, once per completed request.
///
/// Cloning is cheap and all clones share the same counters, so a session can
/// be handed to several services at once. Responses may complete in any order;
/// counter updates are serialized through a mutex and the last write wins.
#[derive(Debug, Clone)]
pub struct RedditSession {
    /// OAuth access token, supplied externally. Acquisition and refresh are
    /// out of scope for this crate.
    access_token: String,
    rate_limit: Arc<Mutex<RateLimit>>,
}

impl RedditSession {
    /// Creates a session from an externally obtained access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            rate_limit: Arc::new(Mutex::new(RateLimit::default())),
        }
    }

    /// The bearer token sent on every request.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Current snapshot of the rate-limit counters.
    pub fn rate_limit(&self) -> RateLimit {
        *self.rate_limit.lock().expect("rate limit lock poisoned")
    }

    /// Updates the rate-limit counters from the headers of a completed
    /// response. Called by the transport after every request, whatever the
    /// status code.
    pub fn update_rate_limit(&self, headers: &HeaderMap) {
        self.rate_limit
            .lock()
            .expect("rate limit lock poisoned")
            .update_from_headers(headers);
    }
}
