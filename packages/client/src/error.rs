//! Client-level error types.
//!
//! Every operation returns `Result<_, ClientError>`. The variants separate
//! failures below HTTP ([`ClientError::Transport`]), responses the node
//! rejected ([`ClientError::Client`] for 4xx, [`ClientError::Server`] for 5xx,
//! both carrying the node's [`ErrorMessage`]), and successful responses the
//! client could not understand ([`ClientError::Decode`]).

use beacon_node_api::ErrorMessage;
use thiserror::Error;

use crate::transport::TransportError;

/// Why a 2xx response could not be turned into the declared envelope.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The response was not `application/json`.
    #[error("unexpected content type: {}", .0.as_deref().unwrap_or("<none>"))]
    ContentType(Option<String>),

    /// The body was not valid JSON.
    #[error("malformed JSON body: {0}")]
    Json(#[source] serde_json::Error),

    /// The body was valid JSON but had no `data` field.
    #[error("response body has no `data` field")]
    MissingData,

    /// `data` was present but did not match the declared type.
    #[error("`data` does not match the expected schema: {0}")]
    Schema(#[source] serde_json::Error),
}

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout, or TLS failure. Never retried by the client.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The node rejected the request (4xx, or any non-2xx below 500).
    #[error("beacon node rejected the request: {}", describe(.0))]
    Client(ErrorMessage),

    /// The node failed to handle the request (5xx).
    #[error("beacon node error: {}", describe(.0))]
    Server(ErrorMessage),

    /// A 2xx response could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

fn describe(e: &ErrorMessage) -> String {
    match &e.message {
        Some(message) => format!("{} {}", e.status, message),
        None => e.status.to_string(),
    }
}

impl ClientError {
    /// Wrap an error record, choosing the variant from its HTTP status.
    pub fn from_status(http_status: u16, record: ErrorMessage) -> Self {
        if (500..600).contains(&http_status) {
            ClientError::Server(record)
        } else {
            ClientError::Client(record)
        }
    }

    /// The node's error record, for HTTP-level failures.
    pub fn error_message(&self) -> Option<&ErrorMessage> {
        match self {
            ClientError::Client(e) | ClientError::Server(e) => Some(e),
            _ => None,
        }
    }

    /// The status from the node's error record, for HTTP-level failures.
    pub fn status(&self) -> Option<u16> {
        self.error_message().map(|e| e.status)
    }

    /// `true` for a 404 from the node.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_follows_status_class() {
        let e = ClientError::from_status(404, ErrorMessage::new(404, "Not Found"));
        assert!(matches!(e, ClientError::Client(_)));
        assert!(e.is_not_found());

        let e = ClientError::from_status(503, ErrorMessage::new(503, "Service Unavailable"));
        assert!(matches!(e, ClientError::Server(_)));
        assert_eq!(e.status(), Some(503));
    }

    #[test]
    fn display_includes_status_and_message() {
        let e = ClientError::from_status(400, ErrorMessage::new(400, "Invalid state ID: foo"));
        assert_eq!(
            e.to_string(),
            "beacon node rejected the request: 400 Invalid state ID: foo"
        );
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let e = ClientError::from(DecodeError::MissingData);
        assert!(e.status().is_none());
        assert!(e.error_message().is_none());

        let e = ClientError::from(TransportError::Timeout { ms: 500 });
        assert_eq!(e.to_string(), "transport failure: request timed out after 500ms");
    }
}
