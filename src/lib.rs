//! # Reddit Client
//!
//! Typed async client for the Reddit OAuth REST API.
//!
//! The crate is a thin wrapper around `https://oauth.reddit.com`: it builds
//! bearer-authenticated requests from typed parameters, dispatches them with
//! [`reqwest`], decodes the platform's `Thing`/`Listing` JSON envelopes into
//! typed results, and tracks the rate-limit counters the server reports on
//! every response.
//!
//! What it deliberately does not do:
//! - acquire or refresh OAuth tokens - the access token is an opaque string
//!   supplied by the caller
//! - retry, back off or cache - a call either fully succeeds with a typed
//!   payload or fully fails with one [`error::AppError`]
//! - model the full Reddit entity schema - payloads stay as raw JSON inside
//!   the envelopes
//!
//! ## Usage
//!
//! ```ignore
//! use reddit_client::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Arc::new(Config::new());
//! let client = Arc::new(ReqwestHttpClient::new(config)?);
//! let session = RedditSession::new(access_token);
//!
//! let listings = ListingServiceImpl::new(client.clone());
//! let page = listings
//!     .get_links(&session, LinkSort::Hot, Some("rust"), &Paginator::new())
//!     .await?;
//!
//! let actions = ActionServiceImpl::new(client);
//! actions.vote(&session, VoteDirection::Up, "t3_abc").await?;
//!
//! println!("used {} of the window", session.rate_limit().used);
//! ```
//!
//! Operations are grouped into services (messages, listings, subreddits,
//! account, actions), each defined by a trait in
//! [`application::interfaces`] and implemented generically over the
//! [`transport::RedditHttpClient`] seam, so tests can substitute a canned
//! client for the network.

/// Endpoint operations: service traits and implementations
pub mod application;
/// Client configuration
pub mod config;
/// Shared constants: endpoint root, header names, limits
pub mod constants;
/// Error taxonomy
pub mod error;
/// Request parameters and response envelopes
pub mod model;
/// Commonly used types, re-exported
pub mod prelude;
/// Session and rate-limit state
pub mod session;
/// Request construction, dispatch and decoding
pub mod transport;
/// Small shared helpers
pub mod utils;

/// Library version, from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version.
pub fn version() -> &'static str {
    VERSION
}
