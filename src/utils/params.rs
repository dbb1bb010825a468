//! Helpers for turning typed arguments into request parameters.

use crate::constants::MAX_ENCODED_QUERY_LEN;
use crate::error::AppError;
use url::form_urlencoded;

/// Joins a list of fullnames (or ids) into the comma-separated form the API
/// expects. Order is preserved; there is no whitespace and no leading or
/// trailing comma.
pub fn comma_joined<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Validates a free-text search query against the API limit.
///
/// The limit applies to the percent-encoded form of the query. Oversized
/// queries are rejected here, before any request is built, so no network call
/// happens. The original client silently returned no request in this case;
/// an explicit error is easier to test against and to handle.
pub fn validate_query(query: &str) -> Result<(), AppError> {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    if encoded.len() > MAX_ENCODED_QUERY_LEN {
        return Err(AppError::InvalidInput(format!(
            "search query exceeds {MAX_ENCODED_QUERY_LEN} characters after encoding"
        )));
    }
    Ok(())
}
