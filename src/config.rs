//! Client configuration loaded from the environment.

use crate::constants::{DEFAULT_TIMEOUT_SECS, OAUTH_BASE_URL, USER_AGENT};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Main configuration for the Reddit API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL for the Reddit OAuth REST API
    pub base_url: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables, falling back to the
    /// library defaults.
    ///
    /// Recognized variables:
    /// * `REDDIT_BASE_URL` - overrides the OAuth endpoint root (useful for tests)
    /// * `REDDIT_USER_AGENT` - overrides the user agent
    /// * `REDDIT_TIMEOUT` - request timeout in seconds
    pub fn new() -> Self {
        dotenv().ok();
        Self {
            base_url: get_env_or_default("REDDIT_BASE_URL", OAUTH_BASE_URL.to_string()),
            user_agent: get_env_or_default("REDDIT_USER_AGENT", USER_AGENT.to_string()),
            timeout: get_env_or_default("REDDIT_TIMEOUT", DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a configuration pointing at a specific endpoint root, keeping
    /// defaults for everything else.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Gets an environment variable or returns a default value if not found or
/// cannot be parsed
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}
