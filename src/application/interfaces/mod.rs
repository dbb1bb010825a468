//! Interfaces implemented by the endpoint services.

/// Account operations
pub mod account;
/// Voting, saving and hiding
pub mod actions;
/// Link, comment and search listings
pub mod listings;
/// Private messages
pub mod messages;
/// Subreddit listings and search
pub mod subreddits;

pub use account::AccountService;
pub use actions::ActionService;
pub use listings::ListingService;
pub use messages::MessageService;
pub use subreddits::SubredditService;
