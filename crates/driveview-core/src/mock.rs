//! Scripted [`Transport`] for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::client::{RawResponse, Transport};
use crate::error::TransportError;

/// Replays queued responses in order and records every requested URL.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    requested: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(self, response: RawResponse) -> Self {
        self.responses.borrow_mut().push_back(Ok(response));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.requested.borrow_mut().push(url.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}
