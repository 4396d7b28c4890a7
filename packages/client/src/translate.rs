//! Error translation: non-2xx response → [`ClientError`].

use beacon_node_api::ErrorMessage;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::ClientError;
use crate::transport::HttpResponse;

/// The error body as nodes actually send it: every field optional or `null`,
/// status under `status`, `code`, or both.
#[derive(Debug, Deserialize)]
struct LenientErrorBody {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    code: Option<u16>,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<Vec<String>>,
    #[serde(default)]
    stacktraces: Option<Vec<String>>,
}

impl LenientErrorBody {
    fn status(&self) -> Option<u16> {
        self.status.or(self.code)
    }
}

/// The standard reason phrase for `status`, or `"Unknown Status"`.
pub fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status")
}

/// Build the error record for a failed response.
///
/// A JSON body carrying a status is preserved verbatim. A JSON body with a
/// message but no status keeps its fields and takes the HTTP status. Anything
/// else is replaced by a record synthesized from the status line.
pub fn error_record(response: &HttpResponse) -> ErrorMessage {
    if response.is_json() {
        if let Ok(body) = serde_json::from_slice::<LenientErrorBody>(&response.body) {
            if body.status().is_some() || body.message.is_some() {
                return ErrorMessage {
                    status: body.status().unwrap_or(response.status),
                    error_type: body.error_type,
                    message: body.message,
                    details: body.details.unwrap_or_default(),
                    stacktraces: body.stacktraces.unwrap_or_default(),
                };
            }
        }
    }

    tracing::debug!(
        status = response.status,
        content_type = response.content_type.as_deref().unwrap_or(""),
        "synthesizing error record from status line"
    );
    ErrorMessage::new(response.status, reason_phrase(response.status))
}

/// Turn a non-2xx response into the matching [`ClientError`] variant.
pub fn translate(response: &HttpResponse) -> ClientError {
    ClientError::from_status(response.status, error_record(response))
}
