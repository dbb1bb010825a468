//! Raw HTTP outcome and the decode stages applied to it.
//!
//! Decoding is a chain of total functions; the first failing stage
//! short-circuits the rest via `?`:
//!
//! 1. transport - a failed dispatch surfaces as [`AppError::Network`] before a
//!    `RawResponse` ever exists
//! 2. status - [`ensure_status`] maps non-2xx responses to
//!    [`AppError::HttpStatus`]
//! 3. parse - [`parse_json`] decodes the body bytes as generic JSON
//! 4. shape - [`Thing::from_value`](crate::model::Thing::from_value) /
//!    [`Listing::from_value`](crate::model::Listing::from_value) interpret the
//!    platform envelopes
//! 5. projection - services convert the envelope into their declared result

use crate::error::AppError;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Raw outcome of one dispatched request. Ephemeral: lives between dispatch
/// and decode only.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers, including the rate-limit counters
    pub headers: HeaderMap,
    /// Body bytes, still undecoded
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Collects a reqwest response into an owned value. Failing to read the
    /// body is a transport error.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Body decoded as text, lossily.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Status stage: passes 2xx responses through, maps everything else to
/// [`AppError::HttpStatus`] carrying the code and body.
///
/// 202 Accepted is a success: some endpoints (`/api/read_all_messages`)
/// acknowledge queued work with it and no polling happens here.
pub fn ensure_status(response: RawResponse) -> Result<RawResponse, AppError> {
    if response.status.is_success() {
        Ok(response)
    } else {
        Err(AppError::HttpStatus {
            status: response.status,
            body: response.body_text(),
        })
    }
}

/// Parse stage: decodes the body bytes as generic JSON.
pub fn parse_json(response: &RawResponse) -> Result<Value, AppError> {
    serde_json::from_slice(&response.body).map_err(AppError::from)
}

/// Status and parse stages combined: the decode path for callers that want
/// the payload as raw JSON.
pub fn json_value(response: RawResponse) -> Result<Value, AppError> {
    let response = ensure_status(response)?;
    parse_json(&response)
}

/// Like [`json_value`], but an empty 2xx body decodes to `Value::Null`
/// instead of a parse error. For endpoints that acknowledge with a bare
/// status and nothing else.
pub fn json_or_null(response: RawResponse) -> Result<Value, AppError> {
    let response = ensure_status(response)?;
    if response.body.is_empty() {
        return Ok(Value::Null);
    }
    parse_json(&response)
}
