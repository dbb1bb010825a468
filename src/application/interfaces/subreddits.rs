//! Interface for the subreddit service.

use crate::error::AppError;
use crate::model::{Listing, Paginator, SubredditsMineWhere, SubredditsWhere};
use crate::session::RedditSession;
use async_trait::async_trait;
use serde_json::Value;

/// Subreddit listings and search.
#[async_trait]
pub trait SubredditService: Send + Sync {
    /// Gets a sitewide subreddit listing by category.
    async fn get_subreddits(
        &self,
        session: &RedditSession,
        subreddits_where: SubredditsWhere,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError>;

    /// Gets the subreddits the authenticated user has the given relationship
    /// with.
    async fn get_subscribing(
        &self,
        session: &RedditSession,
        mine_where: SubredditsMineWhere,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError>;

    /// Searches subreddits by title and description.
    ///
    /// The query must encode to at most 512 characters; longer queries are
    /// rejected before any request is dispatched.
    async fn search_subreddits(
        &self,
        session: &RedditSession,
        query: &str,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError>;

    /// Gets the stickied post of a subreddit.
    async fn get_sticky(
        &self,
        session: &RedditSession,
        subreddit: &str,
    ) -> Result<Value, AppError>;
}
