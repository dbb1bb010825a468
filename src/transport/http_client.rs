//! Dispatch seam between endpoint operations and the network.

use crate::config::Config;
use crate::error::AppError;
use crate::session::RedditSession;
use crate::transport::request::ApiRequest;
use crate::transport::response::RawResponse;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Executes [`ApiRequest`]s against the API.
///
/// Services are generic over this trait, so tests can substitute a canned
/// client and exercise the full request/decode path without a network.
#[async_trait]
pub trait RedditHttpClient: Send + Sync {
    /// Dispatches one request and returns the raw outcome.
    ///
    /// Returns the response for any HTTP status; mapping non-2xx statuses to
    /// errors is a decode concern. A transport-level failure surfaces as
    /// [`AppError::Network`] and nothing else runs.
    async fn execute(
        &self,
        session: &RedditSession,
        request: ApiRequest,
    ) -> Result<RawResponse, AppError>;
}

/// reqwest-backed client used in production.
///
/// Each call dispatches one independent asynchronous request; no ordering
/// exists between concurrent calls. Dropping the returned future cancels the
/// request and no result is produced for it.
pub struct ReqwestHttpClient {
    config: Arc<Config>,
    http: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Creates a client from the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self { config, http })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl RedditHttpClient for ReqwestHttpClient {
    async fn execute(
        &self,
        session: &RedditSession,
        request: ApiRequest,
    ) -> Result<RawResponse, AppError> {
        let method = request.method().clone();
        let path = request.path().to_string();
        let http_request = request.into_http_request(&self.http, &self.config, session)?;

        debug!("{} {}", method, path);
        let response = self.http.execute(http_request).await?;
        let raw = RawResponse::from_reqwest(response).await?;

        // Counters update on every completed request, success or not.
        session.update_rate_limit(&raw.headers);

        if !raw.status.is_success() {
            warn!("{} {} answered {}", method, path, raw.status);
        }
        Ok(raw)
    }
}
