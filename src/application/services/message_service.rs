//! Private-message operations.

use crate::application::interfaces::MessageService;
use crate::constants::API_TYPE_JSON;
use crate::error::AppError;
use crate::model::{Listing, MessageWhere, Paginator};
use crate::session::RedditSession;
use crate::transport::{ApiRequest, RedditHttpClient, response};
use crate::utils::params::comma_joined;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the message service.
pub struct MessageServiceImpl<T: RedditHttpClient> {
    client: Arc<T>,
}

impl<T: RedditHttpClient> MessageServiceImpl<T> {
    /// Creates a new instance of the message service.
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    /// POST `{path}` with the given fullnames comma-joined into the `id`
    /// parameter. Shared by the read/unread/collapse/uncollapse calls, which
    /// differ only in path.
    async fn post_fullnames(
        &self,
        session: &RedditSession,
        path: &str,
        fullnames: &[String],
    ) -> Result<Value, AppError> {
        let request = ApiRequest::post(path).with_param("id", comma_joined(fullnames));
        let raw = self.client.execute(session, request).await?;
        response::json_value(raw)
    }
}

#[async_trait]
impl<T: RedditHttpClient + 'static> MessageService for MessageServiceImpl<T> {
    async fn get_messages(
        &self,
        session: &RedditSession,
        message_where: MessageWhere,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError> {
        let path = format!("/message{}", message_where.path());
        let mut request = ApiRequest::get(path);
        if let Some(paginator) = paginator {
            request = request.with_params(paginator.parameters());
        }
        let raw = self.client.execute(session, request).await?;
        let listing = Listing::from_value(response::json_value(raw)?)?;
        debug!("{} messages fetched", listing.children.len());
        Ok(listing)
    }

    async fn mark_as_read(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Value, AppError> {
        self.post_fullnames(session, "/api/read_message", fullnames)
            .await
    }

    async fn mark_as_unread(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Value, AppError> {
        self.post_fullnames(session, "/api/unread_message", fullnames)
            .await
    }

    async fn mark_all_as_read(&self, session: &RedditSession) -> Result<Value, AppError> {
        info!("Marking all messages as read");
        let request = ApiRequest::post("/api/read_all_messages");
        let raw = self.client.execute(session, request).await?;
        // The server queues the work and may answer 202 with an empty body.
        response::json_or_null(raw)
    }

    async fn collapse(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Value, AppError> {
        self.post_fullnames(session, "/api/collapse_message", fullnames)
            .await
    }

    async fn uncollapse(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Value, AppError> {
        self.post_fullnames(session, "/api/uncollapse_message", fullnames)
            .await
    }

    async fn block_via_inbox(
        &self,
        session: &RedditSession,
        fullname: &str,
    ) -> Result<Value, AppError> {
        let request = ApiRequest::post("/api/block").with_param("id", fullname);
        let raw = self.client.execute(session, request).await?;
        response::json_value(raw)
    }

    async fn unblock_subreddit(
        &self,
        session: &RedditSession,
        fullname: &str,
    ) -> Result<Value, AppError> {
        let request = ApiRequest::post("/api/unblock_subreddit").with_param("id", fullname);
        let raw = self.client.execute(session, request).await?;
        response::json_value(raw)
    }

    async fn compose(
        &self,
        session: &RedditSession,
        to: &str,
        subject: &str,
        text: &str,
        from_subreddit: Option<&str>,
        captcha: &str,
        captcha_iden: &str,
    ) -> Result<Value, AppError> {
        if to.is_empty() || subject.is_empty() || text.is_empty() {
            return Err(AppError::InvalidInput(
                "compose requires a recipient, a subject and a body".to_string(),
            ));
        }

        let mut request = ApiRequest::post("/api/compose")
            .with_param("api_type", API_TYPE_JSON)
            .with_param("text", text)
            .with_param("subject", subject)
            .with_param("to", to);
        if let Some(from_subreddit) = from_subreddit {
            request = request.with_param("from_sr", from_subreddit);
        }
        if !captcha.is_empty() && !captcha_iden.is_empty() {
            request = request
                .with_param("captcha", captcha)
                .with_param("iden", captcha_iden);
        }

        info!("Composing message to {}", to);
        let raw = self.client.execute(session, request).await?;
        response::json_value(raw)
    }
}
