//! Shared helpers for the unit tests.

use async_trait::async_trait;
use reddit_client::error::AppError;
use reddit_client::session::RedditSession;
use reddit_client::transport::{ApiRequest, RawResponse, RedditHttpClient};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::sync::Mutex;

/// Canned HTTP client: records every dispatched request and answers each one
/// with the same fixed response. Lets service tests exercise the full
/// request-construction and decode path without a network.
pub struct MockHttpClient {
    response: RawResponse,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockHttpClient {
    /// Client answering every request with the given status and body.
    pub fn with_response(status: u16, body: &str) -> Self {
        Self {
            response: RawResponse {
                status: StatusCode::from_u16(status).expect("valid status"),
                headers: HeaderMap::new(),
                body: body.as_bytes().to_vec(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Client answering every request with 200 and the given JSON body.
    pub fn with_json(body: &str) -> Self {
        Self::with_response(200, body)
    }

    /// Number of requests dispatched so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recently dispatched request.
    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was dispatched")
            .clone()
    }
}

#[async_trait]
impl RedditHttpClient for MockHttpClient {
    async fn execute(
        &self,
        _session: &RedditSession,
        request: ApiRequest,
    ) -> Result<RawResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// A minimal listing body with the given children payloads.
pub fn listing_body(children: &str) -> String {
    format!(r#"{{"kind": "Listing", "data": {{"children": [{children}], "after": null, "before": null}}}}"#)
}

/// A session with a fixed test token.
pub fn test_session() -> RedditSession {
    RedditSession::new("test-token")
}
