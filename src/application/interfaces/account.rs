//! Interface for the account service.

use crate::error::AppError;
use crate::model::Thing;
use crate::session::RedditSession;
use async_trait::async_trait;
use serde_json::Value;

/// Operations on the authenticated user's own account.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the identity of the authenticated user as a `t2` thing.
    async fn get_me(&self, session: &RedditSession) -> Result<Thing, AppError>;

    /// Gets the categories the user has saved things under.
    async fn get_saved_categories(&self, session: &RedditSession) -> Result<Value, AppError>;
}
