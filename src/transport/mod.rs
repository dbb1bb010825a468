//! Request construction, dispatch and response decoding.

/// HTTP client trait and reqwest-backed implementation
pub mod http_client;
/// Immutable request description
pub mod request;
/// Raw response and decode stages
pub mod response;

pub use http_client::{RedditHttpClient, ReqwestHttpClient};
pub use request::ApiRequest;
pub use response::RawResponse;
