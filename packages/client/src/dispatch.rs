//! The request dispatcher: one pass-through HTTP exchange per call.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::ClientError;
use crate::query::QueryParams;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, APPLICATION_JSON};

/// Turns `(method, path, query, body)` into an [`HttpRequest`] and hands it
/// to the shared transport. No retry, caching, or status interpretation.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.transport.base_url())
            .finish()
    }
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Send one request. `body`, when present, is serialized as JSON before
    /// the transport is touched; a serialization failure is
    /// [`ClientError::Encode`].
    pub fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<HttpResponse, ClientError> {
        let body = body
            .map(|b| serde_json::to_vec(b).map_err(ClientError::Encode))
            .transpose()?
            .map(|bytes| (bytes, APPLICATION_JSON));

        let request = HttpRequest {
            method,
            path: path.to_string(),
            query: query.encode(),
            accept: APPLICATION_JSON,
            body,
        };

        tracing::debug!(%method, path = %request.path_and_query(), "dispatching request");
        let response = self.transport.send(&request).inspect_err(|e| {
            tracing::debug!(%method, path = %request.path, error = %e, "transport failure");
        })?;
        tracing::debug!(
            %method,
            path = %request.path,
            status = response.status,
            "received response"
        );

        Ok(response)
    }
}
