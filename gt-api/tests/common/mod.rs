//! Shared test utilities for endpoint integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gt_api::{ApiClient, RawResponse, Transport, TransportRequest};
use gt_core::error::TransportError;

type Handler = dyn Fn(&TransportRequest) -> Result<RawResponse, TransportError> + Send + Sync;

/// Transport that records every request and answers from a handler.
pub struct StubTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    /// Answer every request with the same status and body.
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let response = RawResponse::new(status, body.to_string());
        Self::with_handler(move |_| Ok(response.clone()))
    }

    /// Fail every request at the transport level.
    pub fn failing(error: TransportError) -> Arc<Self> {
        Self::with_handler(move |_| Err(error.clone()))
    }

    /// Answer through a custom handler.
    pub fn with_handler<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&TransportRequest) -> Result<RawResponse, TransportError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request received. Panics unless exactly one was sent.
    pub fn single_request(&self) -> TransportRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }

    /// Body of the only request, parsed as JSON.
    pub fn single_json_body(&self) -> serde_json::Value {
        let request = self.single_request();
        let body = request.body.expect("request had no body");
        serde_json::from_slice(&body).expect("request body was not JSON")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        let response = (self.handler)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

/// Client wired to a stub.
pub fn client(stub: &Arc<StubTransport>) -> ApiClient {
    ApiClient::from_shared(stub.clone())
}

/// Server payload of a single user.
pub fn user_json(id: u64, login: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("{login}@example.com"),
        "name": login.to_uppercase(),
        "login": login,
        "theme": "",
        "orgId": 1,
        "isGrafanaAdmin": false,
        "isDisabled": false,
        "isExternal": false,
        "authLabels": [],
        "updatedAt": "2024-03-01T12:00:00Z",
        "createdAt": "2024-01-01T12:00:00Z",
        "avatarUrl": "/avatar/abc"
    })
}
