//! Subreddit listing and search operations.

use crate::application::interfaces::SubredditService;
use crate::error::AppError;
use crate::model::{Listing, Paginator, SubredditsMineWhere, SubredditsWhere};
use crate::session::RedditSession;
use crate::transport::{ApiRequest, RedditHttpClient, response};
use crate::utils::params::validate_query;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the subreddit service.
pub struct SubredditServiceImpl<T: RedditHttpClient> {
    client: Arc<T>,
}

impl<T: RedditHttpClient> SubredditServiceImpl<T> {
    /// Creates a new instance of the subreddit service.
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    async fn fetch_listing(
        &self,
        session: &RedditSession,
        path: String,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError> {
        let mut request = ApiRequest::get(path);
        if let Some(paginator) = paginator {
            request = request.with_params(paginator.parameters());
        }
        let raw = self.client.execute(session, request).await?;
        Listing::from_value(response::json_value(raw)?)
    }
}

#[async_trait]
impl<T: RedditHttpClient + 'static> SubredditService for SubredditServiceImpl<T> {
    async fn get_subreddits(
        &self,
        session: &RedditSession,
        subreddits_where: SubredditsWhere,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError> {
        self.fetch_listing(session, subreddits_where.path().to_string(), paginator)
            .await
    }

    async fn get_subscribing(
        &self,
        session: &RedditSession,
        mine_where: SubredditsMineWhere,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError> {
        self.fetch_listing(session, mine_where.path().to_string(), paginator)
            .await
    }

    async fn search_subreddits(
        &self,
        session: &RedditSession,
        query: &str,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError> {
        validate_query(query)?;
        info!("Searching subreddits for {:?}", query);
        let mut request = ApiRequest::get("/subreddits/search").with_param("q", query);
        if let Some(paginator) = paginator {
            request = request.with_params(paginator.parameters());
        }
        let raw = self.client.execute(session, request).await?;
        Listing::from_value(response::json_value(raw)?)
    }

    async fn get_sticky(
        &self,
        session: &RedditSession,
        subreddit: &str,
    ) -> Result<Value, AppError> {
        let request = ApiRequest::get(format!("/r/{subreddit}/sticky"));
        let raw = self.client.execute(session, request).await?;
        response::json_value(raw)
    }
}
