//! Implementations of the endpoint services.

/// Account service implementation
pub mod account_service;
/// Action service implementation
pub mod action_service;
/// Listing service implementation
pub mod listing_service;
/// Message service implementation
pub mod message_service;
/// Subreddit service implementation
pub mod subreddit_service;

pub use account_service::AccountServiceImpl;
pub use action_service::ActionServiceImpl;
pub use listing_service::ListingServiceImpl;
pub use message_service::MessageServiceImpl;
pub use subreddit_service::SubredditServiceImpl;
