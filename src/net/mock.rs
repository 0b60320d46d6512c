//! In-memory transport and diagnostics sink for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::client::ApiClient;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ApiConfig;
use crate::util::diagnostics::Diagnostics;

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_owned(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".to_owned())))
    }
}

/// Keeps every report so tests can assert on what was logged.
#[derive(Clone, Default)]
pub struct RecordingDiagnostics {
    entries: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingDiagnostics {
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.borrow().clone()
    }

    pub fn scopes(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|(scope, _)| scope.clone()).collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, scope: &str, message: &str) {
        self.entries.borrow_mut().push((scope.to_owned(), message.to_owned()));
    }
}

/// Client against the default config wired to a mock and a recorder.
pub fn mock_client() -> (ApiClient<MockTransport, RecordingDiagnostics>, MockTransport, RecordingDiagnostics) {
    let transport = MockTransport::default();
    let diagnostics = RecordingDiagnostics::default();
    let client = ApiClient::new(ApiConfig::default(), transport.clone()).with_diagnostics(diagnostics.clone());
    (client, transport, diagnostics)
}
