//! Link, comment and search listing operations.

use crate::application::interfaces::ListingService;
use crate::constants::{API_TYPE_JSON, DEFAULT_COMMENT_DEPTH, DEFAULT_COMMENT_LIMIT};
use crate::error::AppError;
use crate::model::{CommentSort, Listing, LinkSort, Paginator, SearchSort, UserContent};
use crate::session::RedditSession;
use crate::transport::{ApiRequest, RedditHttpClient, response};
use crate::utils::params::{comma_joined, validate_query};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the listing service.
pub struct ListingServiceImpl<T: RedditHttpClient> {
    client: Arc<T>,
}

impl<T: RedditHttpClient> ListingServiceImpl<T> {
    /// Creates a new instance of the listing service.
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    async fn fetch_listing(
        &self,
        session: &RedditSession,
        request: ApiRequest,
    ) -> Result<Listing, AppError> {
        let raw = self.client.execute(session, request).await?;
        Listing::from_value(response::json_value(raw)?)
    }
}

#[async_trait]
impl<T: RedditHttpClient + 'static> ListingService for ListingServiceImpl<T> {
    async fn get_links(
        &self,
        session: &RedditSession,
        sort: LinkSort,
        subreddit: Option<&str>,
        paginator: &Paginator,
    ) -> Result<Listing, AppError> {
        let path = match subreddit {
            Some(name) => format!("/r/{}{}", name, sort.path()),
            None => sort.path().to_string(),
        };
        debug!("Fetching links from {}", path);
        let request = ApiRequest::get(path).with_params(paginator.parameters());
        self.fetch_listing(session, request).await
    }

    async fn get_comment_thread(
        &self,
        session: &RedditSession,
        link_id: &str,
        sort: CommentSort,
        comments: Option<&[String]>,
    ) -> Result<Listing, AppError> {
        let mut request = ApiRequest::get(format!("/comments/{link_id}"))
            .with_param("sort", sort.as_param())
            .with_param("depth", DEFAULT_COMMENT_DEPTH.to_string())
            .with_param("showmore", "True")
            .with_param("limit", DEFAULT_COMMENT_LIMIT.to_string());
        if let Some(comments) = comments {
            request = request.with_param("comment", comma_joined(comments));
        }
        let raw = self.client.execute(session, request).await?;
        Listing::from_comment_thread(response::json_value(raw)?)
    }

    async fn get_more_children(
        &self,
        session: &RedditSession,
        children: &[String],
        link_fullname: &str,
        sort: CommentSort,
    ) -> Result<Value, AppError> {
        let request = ApiRequest::get("/api/morechildren")
            .with_param("children", comma_joined(children))
            .with_param("link_id", link_fullname)
            .with_param("sort", sort.as_param())
            .with_param("api_type", API_TYPE_JSON);
        let raw = self.client.execute(session, request).await?;
        response::json_value(raw)
    }

    async fn get_user_content(
        &self,
        session: &RedditSession,
        username: &str,
        content: UserContent,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError> {
        let mut request = ApiRequest::get(format!("/user/{}{}", username, content.path()));
        if let Some(paginator) = paginator {
            request = request.with_params(paginator.parameters());
        }
        self.fetch_listing(session, request).await
    }

    async fn get_info(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Listing, AppError> {
        let request = ApiRequest::get("/api/info").with_param("id", comma_joined(fullnames));
        self.fetch_listing(session, request).await
    }

    async fn search_links(
        &self,
        session: &RedditSession,
        subreddit: Option<&str>,
        query: &str,
        sort: SearchSort,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError> {
        validate_query(query)?;
        let path = match subreddit {
            Some(name) => format!("/r/{name}/search"),
            None => "/search".to_string(),
        };
        info!("Searching links for {:?} in {}", query, path);
        let mut request = ApiRequest::get(path)
            .with_param("q", query)
            .with_param("sort", sort.as_param());
        if let Some(paginator) = paginator {
            request = request.with_params(paginator.parameters());
        }
        self.fetch_listing(session, request).await
    }

    async fn get_random(
        &self,
        session: &RedditSession,
        subreddit: Option<&str>,
    ) -> Result<Value, AppError> {
        let path = match subreddit {
            Some(name) => format!("/r/{name}/random"),
            None => "/random".to_string(),
        };
        let raw = self.client.execute(session, ApiRequest::get(path)).await?;
        response::json_value(raw)
    }
}
