//! Interface for the listing service.

use crate::error::AppError;
use crate::model::{CommentSort, Listing, LinkSort, Paginator, SearchSort, UserContent};
use crate::session::RedditSession;
use async_trait::async_trait;
use serde_json::Value;

/// Link, comment and search listings.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Gets a page of links, sitewide or from one subreddit.
    ///
    /// The paginator is required: link listings are unbounded and a request
    /// without explicit paging intent is almost always a caller bug.
    async fn get_links(
        &self,
        session: &RedditSession,
        sort: LinkSort,
        subreddit: Option<&str>,
        paginator: &Paginator,
    ) -> Result<Listing, AppError>;

    /// Gets the comment tree of a link.
    ///
    /// # Arguments
    /// * `link_id` - Id of the link (without the `t3_` prefix)
    /// * `comments` - Optional focus comments, joined into a comma-separated
    ///   `comment` parameter
    async fn get_comment_thread(
        &self,
        session: &RedditSession,
        link_id: &str,
        sort: CommentSort,
        comments: Option<&[String]>,
    ) -> Result<Listing, AppError>;

    /// Loads additional comments elided from a comment tree.
    async fn get_more_children(
        &self,
        session: &RedditSession,
        children: &[String],
        link_fullname: &str,
        sort: CommentSort,
    ) -> Result<Value, AppError>;

    /// Gets a section of a user's content (overview, submitted, comments, ...).
    async fn get_user_content(
        &self,
        session: &RedditSession,
        username: &str,
        content: UserContent,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError>;

    /// Looks up things by fullname.
    async fn get_info(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Listing, AppError>;

    /// Searches links, sitewide or within one subreddit.
    ///
    /// The query must encode to at most 512 characters; longer queries are
    /// rejected before any request is dispatched.
    async fn search_links(
        &self,
        session: &RedditSession,
        subreddit: Option<&str>,
        query: &str,
        sort: SearchSort,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError>;

    /// Gets a random link, sitewide or from one subreddit.
    async fn get_random(
        &self,
        session: &RedditSession,
        subreddit: Option<&str>,
    ) -> Result<Value, AppError>;
}
