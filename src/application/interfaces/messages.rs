//! Interface for the private-message service.

use crate::error::AppError;
use crate::model::{Listing, MessageWhere, Paginator};
use crate::session::RedditSession;
use async_trait::async_trait;
use serde_json::Value;

/// Operations on the authenticated user's message boxes.
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Gets the messages from the specified box.
    async fn get_messages(
        &self,
        session: &RedditSession,
        message_where: MessageWhere,
        paginator: Option<&Paginator>,
    ) -> Result<Listing, AppError>;

    /// Marks the given messages as read.
    ///
    /// # Arguments
    /// * `fullnames` - Fullnames of the messages, joined into a
    ///   comma-separated `id` parameter in the given order
    async fn mark_as_read(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Value, AppError>;

    /// Marks the given messages as unread.
    async fn mark_as_unread(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Value, AppError>;

    /// Queues marking every message as read. The server acknowledges with
    /// 202 Accepted; that is a success, no polling happens here.
    async fn mark_all_as_read(&self, session: &RedditSession) -> Result<Value, AppError>;

    /// Collapses the given messages in the inbox.
    async fn collapse(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Value, AppError>;

    /// Uncollapses the given messages in the inbox.
    async fn uncollapse(
        &self,
        session: &RedditSession,
        fullnames: &[String],
    ) -> Result<Value, AppError>;

    /// Blocks the author of the given thing via the inbox.
    async fn block_via_inbox(
        &self,
        session: &RedditSession,
        fullname: &str,
    ) -> Result<Value, AppError>;

    /// Unblocks a subreddit whose message was blocked via the inbox.
    async fn unblock_subreddit(
        &self,
        session: &RedditSession,
        fullname: &str,
    ) -> Result<Value, AppError>;

    /// Composes a new private message.
    ///
    /// `to`, `subject` and `text` must be non-empty. The CAPTCHA response and
    /// identifier are sent only when both are non-empty.
    #[allow(clippy::too_many_arguments)]
    async fn compose(
        &self,
        session: &RedditSession,
        to: &str,
        subject: &str,
        text: &str,
        from_subreddit: Option<&str>,
        captcha: &str,
        captcha_iden: &str,
    ) -> Result<Value, AppError>;
}
