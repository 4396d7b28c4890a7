//! The `{ "data": ... }` wrapper used by every successful response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope around a response payload.
///
/// `data` is required. The remaining fields are optional metadata some nodes
/// attach; anything else in the body is ignored.
///
/// # Example
///
/// ```json
/// { "data": { "root": "0xcf8e..." }, "execution_optimistic": false, "finalized": true }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// The response payload.
    pub data: T,

    /// Free-form metadata object, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Whether the response references an unverified execution payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_optimistic: Option<bool>,

    /// Whether the response references finalized history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalized: Option<bool>,
}

impl<T> Envelope<T> {
    /// Wrap a payload with no metadata.
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: None,
            execution_optimistic: None,
            finalized: None,
        }
    }

    /// Discard the metadata and return the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}
