//! The `Listing` envelope.

use crate::error::AppError;
use crate::model::thing::Thing;
use serde::Deserialize;
use serde_json::Value;

/// Reddit's envelope for a paginated collection of [`Thing`]s.
///
/// Decoded from a `{"kind": "Listing", "data": {...}}` payload. The cursors
/// feed straight into a [`Paginator`](crate::model::Paginator) for the next
/// page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    /// Entities in this page, in server order
    pub children: Vec<Thing>,
    /// Cursor of the item after this page, if any
    pub after: Option<String>,
    /// Cursor of the item before this page, if any
    pub before: Option<String>,
    /// Modhash echoed by some endpoints
    pub modhash: Option<String>,
}

#[derive(Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Thing>,
    #[serde(default)]
    after: Option<String>,
    #[serde(default)]
    before: Option<String>,
    #[serde(default)]
    modhash: Option<String>,
}

#[derive(Deserialize)]
struct ListingEnvelope {
    kind: String,
    data: ListingData,
}

impl Listing {
    /// Interprets a generic JSON value as a Listing envelope.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let envelope: ListingEnvelope = serde_json::from_value(value)
            .map_err(|_| AppError::UnexpectedShape { expected: "listing" })?;
        if envelope.kind != "Listing" {
            return Err(AppError::UnexpectedShape { expected: "listing" });
        }
        Ok(Listing {
            children: envelope.data.children,
            after: envelope.data.after,
            before: envelope.data.before,
            modhash: envelope.data.modhash,
        })
    }

    /// Extracts the comments listing from a comment-thread response.
    ///
    /// `/comments/{id}` answers with a two-element array: the link listing
    /// first, the comments listing second. Anything else is a shape error.
    pub fn from_comment_thread(value: Value) -> Result<Self, AppError> {
        let shape_error = || AppError::UnexpectedShape {
            expected: "two-element comment thread array",
        };
        match value {
            Value::Array(elements) => match <[Value; 2]>::try_from(elements) {
                Ok([_, comments]) => Listing::from_value(comments).map_err(|_| shape_error()),
                Err(_) => Err(shape_error()),
            },
            _ => Err(shape_error()),
        }
    }

    /// True when the page carries no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
