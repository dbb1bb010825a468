//! Interface for the action service.

use crate::error::AppError;
use crate::model::VoteDirection;
use crate::session::RedditSession;
use async_trait::async_trait;
use serde_json::Value;

/// Voting, saving and hiding things.
#[async_trait]
pub trait ActionService: Send + Sync {
    /// Casts, changes or withdraws a vote on a thing.
    async fn vote(
        &self,
        session: &RedditSession,
        direction: VoteDirection,
        fullname: &str,
    ) -> Result<Value, AppError>;

    /// Saves (`save` true) or unsaves (`save` false) a thing, optionally
    /// under a category.
    async fn save(
        &self,
        session: &RedditSession,
        save: bool,
        fullname: &str,
        category: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Hides (`hide` true) or unhides (`hide` false) a link.
    async fn hide(
        &self,
        session: &RedditSession,
        hide: bool,
        fullname: &str,
    ) -> Result<Value, AppError>;
}
