//! Handler error type for the mock node.
//!
//! JSON variants serialise to the beacon API error body. Like most production
//! nodes, the status goes under `code`. [`AppError::Syncing`] answers with a
//! plain-text body instead, as a node behind a proxy or still starting up
//! would.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// An error that a handler can return; converts directly to an HTTP response.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest { message: String, details: Vec<String> },
    Syncing,
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            details: Vec::new(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            AppError::BadRequest { message, details } => {
                (StatusCode::BAD_REQUEST, message, details)
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, Vec::new()),
            AppError::Syncing => {
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    "Beacon node is currently syncing",
                )
                    .into_response();
            }
        };

        let mut body = json!({
            "code": status.as_u16(),
            "message": message,
            "stacktraces": [],
        });
        if !details.is_empty() {
            body["details"] = json!(details);
        }
        (status, Json(body)).into_response()
    }
}
