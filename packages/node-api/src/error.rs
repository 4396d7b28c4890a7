//! Standard error response body.

use serde::{Deserialize, Serialize};

/// The JSON body a beacon node returns for every non-success response.
///
/// ```json
/// {
///   "status": 404,
///   "type": "not_found",
///   "message": "Validator not found",
///   "details": ["no validator with index 9999"],
///   "stacktraces": []
/// }
/// ```
///
/// Several node implementations send the status under the key `code`
/// instead; both spellings deserialize into [`ErrorMessage::status`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMessage {
    /// Either a specific error code for an invalid request or the HTTP
    /// status code.
    #[serde(alias = "code")]
    pub status: u16,

    /// Information about the error type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Message describing the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Detailed information about the error, e.g. one entry per failed item.
    #[serde(default)]
    pub details: Vec<String>,

    /// Stacktraces, sent when the node runs in debug mode.
    #[serde(default)]
    pub stacktraces: Vec<String>,
}

impl ErrorMessage {
    /// Construct a record from a status and a message, leaving the optional
    /// fields empty.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            error_type: None,
            message: Some(message.into()),
            details: Vec::new(),
            stacktraces: Vec::new(),
        }
    }

    /// Attach per-item failure details.
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let e = ErrorMessage::new(400, "Invalid voluntary exit")
            .with_details(vec!["signature must not be empty".into()]);
        let json = serde_json::to_string(&e).unwrap();
        let back: ErrorMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn minimal_body_defaults_collections() {
        let e: ErrorMessage = serde_json::from_str(r#"{"status": 500}"#).unwrap();
        assert_eq!(e.status, 500);
        assert!(e.error_type.is_none());
        assert!(e.message.is_none());
        assert!(e.details.is_empty());
        assert!(e.stacktraces.is_empty());
    }

    #[test]
    fn accepts_code_alias() {
        let e: ErrorMessage =
            serde_json::from_str(r#"{"code": 404, "message": "Not found"}"#).unwrap();
        assert_eq!(e.status, 404);
        assert_eq!(e.message.as_deref(), Some("Not found"));
    }

    #[test]
    fn type_field_uses_wire_name() {
        let mut e = ErrorMessage::new(400, "bad");
        e.error_type = Some("invalid_parameter".into());
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "invalid_parameter");
    }
}
