//! Response decoding: 2xx body → [`Envelope<T>`].

use beacon_node_api::Envelope;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;
use crate::transport::HttpResponse;

/// Decode a successful response into the declared envelope.
///
/// Fails when the content type is not JSON, the body is not JSON, `data` is
/// missing, or `data` does not fit `T`. Unknown fields are ignored at every
/// level so that schema additions on the server side do not break decoding.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<Envelope<T>, DecodeError> {
    if !response.is_json() {
        return Err(DecodeError::ContentType(response.content_type.clone()));
    }

    let value: Value = serde_json::from_slice(&response.body).map_err(DecodeError::Json)?;
    if value.get("data").is_none() {
        return Err(DecodeError::MissingData);
    }

    serde_json::from_value(value).map_err(DecodeError::Schema)
}
