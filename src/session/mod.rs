//! Session state for authenticated API access.

/// Session type holding the bearer token and rate-limit counters
pub mod interface;
/// Rate-limit counters tracked from response headers
pub mod rate_limit;

pub use interface::RedditSession;
pub use rate_limit::RateLimit;
