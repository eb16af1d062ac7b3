//! In-crate transport double for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::{ClientConfig, EmbyClient};

pub const BASE_URL: &str = "http://localhost:8096";

/// Records every request and answers with queued responses, in order.
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn respond(status: u16, body: &str) -> Self {
        let stub = Self::default();
        stub.push(status, body);
        stub
    }

    pub fn fail(message: &str) -> Self {
        let stub = Self::default();
        stub.responses.borrow_mut().push_back(Err(message.to_string()));
        stub
    }

    pub fn push(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(message.into()),
            None => Err("stub transport has no response queued".into()),
        }
    }
}

pub fn client(stub: &StubTransport) -> EmbyClient<&StubTransport> {
    EmbyClient::with_transport(ClientConfig::new(BASE_URL, "test-key"), stub).unwrap()
}

pub fn sorted_query(request: &HttpRequest) -> Vec<(String, String)> {
    let mut query = request.query.clone();
    query.sort();
    query
}

pub fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}
