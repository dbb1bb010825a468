//! Typed request parameters and response envelopes.

/// Location enums selecting API paths (message boxes, user content, ...)
pub mod locations;
/// Paginated collection envelope
pub mod listing;
/// Pagination cursors for listing endpoints
pub mod paginator;
/// Sort orders for links, comments and search
pub mod sort;
/// Single-entity envelope
pub mod thing;

pub use listing::Listing;
pub use locations::{MessageWhere, SubredditsMineWhere, SubredditsWhere, UserContent};
pub use paginator::Paginator;
pub use sort::{CommentSort, LinkSort, SearchSort, VoteDirection};
pub use thing::Thing;
