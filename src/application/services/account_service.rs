//! Operations on the authenticated user's account.

use crate::application::interfaces::AccountService;
use crate::error::AppError;
use crate::model::Thing;
use crate::session::RedditSession;
use crate::transport::{ApiRequest, RedditHttpClient, response};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the account service.
pub struct AccountServiceImpl<T: RedditHttpClient> {
    client: Arc<T>,
}

impl<T: RedditHttpClient> AccountServiceImpl<T> {
    /// Creates a new instance of the account service.
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: RedditHttpClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn get_me(&self, session: &RedditSession) -> Result<Thing, AppError> {
        let raw = self
            .client
            .execute(session, ApiRequest::get("/api/v1/me"))
            .await?;
        let thing = Thing::from_value(response::json_value(raw)?)?;
        if thing.kind != "t2" {
            return Err(AppError::UnexpectedShape {
                expected: "t2 thing",
            });
        }
        debug!("Fetched identity of {:?}", thing.data.get("name"));
        Ok(thing)
    }

    async fn get_saved_categories(&self, session: &RedditSession) -> Result<Value, AppError> {
        let raw = self
            .client
            .execute(session, ApiRequest::get("/api/saved_categories"))
            .await?;
        response::json_value(raw)
    }
}
