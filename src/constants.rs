/// Base endpoint for all authenticated Reddit API calls
pub const OAUTH_BASE_URL: &str = "https://oauth.reddit.com";
/// User agent string used in HTTP requests to identify this client to Reddit
pub const USER_AGENT: &str = "Rust-Reddit-Client/0.1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response header carrying the seconds remaining until the rate-limit window resets
pub const RATELIMIT_RESET_HEADER: &str = "x-ratelimit-reset";
/// Response header carrying the number of requests used in the current window
pub const RATELIMIT_USED_HEADER: &str = "x-ratelimit-used";
/// Response header carrying the number of requests remaining in the current window
pub const RATELIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Maximum length of a search query after percent encoding.
///
/// Reddit rejects longer queries server-side; the client refuses to build the
/// request instead.
pub const MAX_ENCODED_QUERY_LEN: usize = 512;

/// Comment-tree depth requested from `/comments/{id}`
pub const DEFAULT_COMMENT_DEPTH: u32 = 4;
/// Maximum number of comments requested from `/comments/{id}`
pub const DEFAULT_COMMENT_LIMIT: u32 = 100;
/// `api_type` value Reddit expects on JSON-returning POST calls
pub const API_TYPE_JSON: &str = "json";
