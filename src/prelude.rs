//! # Reddit Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits of the library.
//!
//! ## Usage
//!
//! ```rust
//! use reddit_client::prelude::*;
//!
//! let config = Config::new();
//! let session = RedditSession::new("access-token");
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Reddit API client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION AND TRANSPORT
// ============================================================================

/// Authenticated session holding the token and rate-limit counters
pub use crate::session::{RateLimit, RedditSession};

/// Dispatch seam and the reqwest-backed client
pub use crate::transport::{ApiRequest, RawResponse, RedditHttpClient, ReqwestHttpClient};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Account service trait for identity operations
pub use crate::application::interfaces::AccountService;

/// Action service trait for voting, saving and hiding
pub use crate::application::interfaces::ActionService;

/// Listing service trait for link, comment and search listings
pub use crate::application::interfaces::ListingService;

/// Message service trait for private-message operations
pub use crate::application::interfaces::MessageService;

/// Subreddit service trait for subreddit listings and search
pub use crate::application::interfaces::SubredditService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Account service implementation
pub use crate::application::services::AccountServiceImpl;

/// Action service implementation
pub use crate::application::services::ActionServiceImpl;

/// Listing service implementation
pub use crate::application::services::ListingServiceImpl;

/// Message service implementation
pub use crate::application::services::MessageServiceImpl;

/// Subreddit service implementation
pub use crate::application::services::SubredditServiceImpl;

// ============================================================================
// REQUEST PARAMETERS AND ENVELOPES
// ============================================================================

/// Response envelopes
pub use crate::model::{Listing, Thing};

/// Pagination cursors
pub use crate::model::Paginator;

/// Sort orders and vote directions
pub use crate::model::{CommentSort, LinkSort, SearchSort, VoteDirection};

/// Path-selecting enums
pub use crate::model::{MessageWhere, SubredditsMineWhere, SubredditsWhere, UserContent};
