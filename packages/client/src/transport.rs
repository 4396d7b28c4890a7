//! The `Transport` trait: the boundary between the client and the network.
//!
//! The client composes a fully-formed [`HttpRequest`] (method, path, encoded
//! query, headers, body) and hands it to a [`Transport`], which performs one
//! exchange and returns the raw [`HttpResponse`]. Status codes are not
//! interpreted here; connection, timeout, and TLS failures are reported as
//! [`TransportError`] and never retried by the client.

use std::fmt;

use thiserror::Error;

/// `Accept` and `Content-Type` value for every request.
pub const APPLICATION_JSON: &str = "application/json";

/// Errors raised below the HTTP layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The base URL and path did not form a valid URL.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The connection could not be established (refused, DNS, TLS handshake).
    #[error("connection failed: {0}")]
    Connect(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// Any other failure while sending the request or reading the response.
    #[error("HTTP transport error: {0}")]
    Http(String),
}

/// HTTP methods used by the beacon API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute path starting with `/`, already percent-encoded.
    pub path: String,
    /// Encoded query string without the leading `?`; empty for none.
    pub query: String,
    pub accept: &'static str,
    /// JSON body and its content type.
    pub body: Option<(Vec<u8>, &'static str)>,
}

impl HttpRequest {
    /// Path plus query, e.g. `/eth/v1/beacon/headers?slot=1`.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// The raw outcome of one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// The `Content-Type` header, when the server sent one.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// `true` for statuses in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `true` when the content type's media type is `application/json`,
    /// ignoring parameters such as `charset` and letter case.
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| {
            ct.split(';')
                .next()
                .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(APPLICATION_JSON))
        })
    }
}

/// Performs one HTTP exchange.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; the client shares one transport
/// across every resource node and every thread that holds one.
pub trait Transport: Send + Sync + 'static {
    /// Send `request` and return the response, whatever its status.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;

    /// The base URL requests are resolved against.
    fn base_url(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>) -> HttpResponse {
        HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: Vec::new(),
        }
    }

    #[test]
    fn success_class_boundaries() {
        assert!(!response(199, None).is_success());
        assert!(response(200, None).is_success());
        assert!(response(204, None).is_success());
        assert!(!response(300, None).is_success());
        assert!(!response(404, None).is_success());
    }

    #[test]
    fn json_detection_ignores_parameters_and_case() {
        assert!(response(200, Some("application/json")).is_json());
        assert!(response(200, Some("application/json; charset=utf-8")).is_json());
        assert!(response(200, Some("Application/JSON")).is_json());
        assert!(!response(200, Some("text/plain")).is_json());
        assert!(!response(200, Some("application/octet-stream")).is_json());
        assert!(!response(200, None).is_json());
    }

    #[test]
    fn path_and_query_joins_with_question_mark() {
        let mut req = HttpRequest {
            method: Method::Get,
            path: "/eth/v1/beacon/headers".into(),
            query: String::new(),
            accept: APPLICATION_JSON,
            body: None,
        };
        assert_eq!(req.path_and_query(), "/eth/v1/beacon/headers");
        req.query = "slot=1".into();
        assert_eq!(req.path_and_query(), "/eth/v1/beacon/headers?slot=1");
    }
}
