//! Default [`Transport`] backed by `reqwest::blocking`.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::config::ClientConfig;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// Blocking HTTP transport.
///
/// Holds one `reqwest` connection pool; clones of the owning client share it.
pub struct HttpTransport {
    base_url: String,
    http: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport for `config.base_url` with the configured timeout
    /// and user agent.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            timeout: config.timeout,
        })
    }

    fn url_for(&self, request: &HttpRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }

    fn map_error(&self, url: &str, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                ms: self.timeout.as_millis() as u64,
            }
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else if e.is_builder() {
            TransportError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }
        } else {
            TransportError::Http(e.to_string())
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(request);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.http.request(method, &url).header(ACCEPT, request.accept);
        if let Some((body, content_type)) = &request.body {
            builder = builder.header(CONTENT_TYPE, *content_type).body(body.clone());
        }

        let resp = builder.send().map_err(|e| self.map_error(&url, e))?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes().map_err(|e| self.map_error(&url, e))?.to_vec();

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
