//! Voting, saving and hiding.

use crate::application::interfaces::ActionService;
use crate::error::AppError;
use crate::model::VoteDirection;
use crate::session::RedditSession;
use crate::transport::{ApiRequest, RedditHttpClient, response};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the action service.
pub struct ActionServiceImpl<T: RedditHttpClient> {
    client: Arc<T>,
}

impl<T: RedditHttpClient> ActionServiceImpl<T> {
    /// Creates a new instance of the action service.
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    async fn post_id(
        &self,
        session: &RedditSession,
        request: ApiRequest,
    ) -> Result<Value, AppError> {
        let raw = self.client.execute(session, request).await?;
        response::json_value(raw)
    }
}

#[async_trait]
impl<T: RedditHttpClient + 'static> ActionService for ActionServiceImpl<T> {
    async fn vote(
        &self,
        session: &RedditSession,
        direction: VoteDirection,
        fullname: &str,
    ) -> Result<Value, AppError> {
        debug!("Voting {} on {}", direction.as_param(), fullname);
        let request = ApiRequest::post("/api/vote")
            .with_param("dir", direction.as_param())
            .with_param("id", fullname);
        self.post_id(session, request).await
    }

    async fn save(
        &self,
        session: &RedditSession,
        save: bool,
        fullname: &str,
        category: Option<&str>,
    ) -> Result<Value, AppError> {
        let path = if save { "/api/save" } else { "/api/unsave" };
        let mut request = ApiRequest::post(path).with_param("id", fullname);
        if let Some(category) = category {
            request = request.with_param("category", category);
        }
        self.post_id(session, request).await
    }

    async fn hide(
        &self,
        session: &RedditSession,
        hide: bool,
        fullname: &str,
    ) -> Result<Value, AppError> {
        let path = if hide { "/api/hide" } else { "/api/unhide" };
        let request = ApiRequest::post(path).with_param("id", fullname);
        self.post_id(session, request).await
    }
}
