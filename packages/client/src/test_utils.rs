//! A recording transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Records every request and answers from a queue of canned responses.
/// When the queue holds a single response it is repeated forever.
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always answer `status` with `body` as `application/json`.
    pub fn json(status: u16, body: &str) -> Arc<Self> {
        Self::new(vec![json_response(status, body)])
    }

    /// Always answer `status` with `body` under `content_type`.
    pub fn raw(status: u16, content_type: Option<&str>, body: &str) -> Arc<Self> {
        Self::new(vec![HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.as_bytes().to_vec(),
        }])
    }

    /// Always fail with a connection error.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::from([Err("connection refused".to_string())])),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

pub fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        content_type: Some("application/json".to_string()),
        body: body.as_bytes().to_vec(),
    }
}

impl Transport for StubTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let mut queue = self.responses.lock().unwrap();
        let next = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        match next {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(msg)) => Err(TransportError::Connect(msg)),
            None => Err(TransportError::Http("stub has no responses".into())),
        }
    }

    fn base_url(&self) -> &str {
        "http://stub"
    }
}
