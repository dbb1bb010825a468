//! Endpoint operations: service traits and their implementations.

/// Service traits
pub mod interfaces;
/// Service implementations backed by a [`RedditHttpClient`](crate::transport::RedditHttpClient)
pub mod services;
