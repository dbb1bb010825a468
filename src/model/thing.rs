//! The `Thing` envelope.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reddit's envelope convention for a single entity: a kind tag (`t1` comment,
/// `t2` account, `t3` link, `t4` message, `t5` subreddit) and a data payload.
///
/// The payload is kept as raw JSON; this crate does not model the full entity
/// schema, callers project out the fields they need.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thing {
    /// Kind prefix identifying the entity type
    pub kind: String,
    /// Entity payload, schema depends on `kind`
    pub data: Value,
}

impl Thing {
    /// Interprets a generic JSON value as a `kind`+`data` envelope.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match serde_json::from_value::<Thing>(value) {
            Ok(thing) => Ok(thing),
            Err(_) => Err(AppError::UnexpectedShape { expected: "thing" }),
        }
    }

    /// The fullname of this thing (`{kind}_{id}`), when the payload carries an
    /// `id` field.
    pub fn name(&self) -> Option<String> {
        match &self.data {
            Value::Object(map) => match map.get("name") {
                Some(Value::String(name)) => Some(name.clone()),
                _ => map
                    .get("id")
                    .and_then(Value::as_str)
                    .map(|id| format!("{}_{}", self.kind, id)),
            },
            _ => None,
        }
    }
}
