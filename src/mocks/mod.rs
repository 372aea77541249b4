//! Mock implementations for testing.
//!
//! This module provides mock transport and authentication components for
//! testing the shell in isolation. The transport records every request it
//! receives, so tests can assert that the remote model fetch happens
//! exactly once across repeated accessor calls.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::auth::AuthManager;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock HTTP transport for testing.
///
/// Tests enqueue responses and verify recorded requests.
///
/// # Example
///
/// ```
/// use vertex_story::mocks::MockHttpTransport;
///
/// let transport = MockHttpTransport::new();
/// transport.enqueue_json_response(200, r#"{"status": "ok"}"#);
/// ```
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        let mut headers = std::collections::HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        self.enqueue_response(Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        }));
    }

    /// Enqueue a transport-level error.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.request_count();
        assert_eq!(actual, expected, "Expected {expected} requests, got {actual}");
    }

    /// Verify that a request was made with the expected method and URL fragment.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {index}");

        let request = &requests[index];
        assert_eq!(
            request.method, method,
            "Expected method {:?}, got {:?}",
            method, request.method
        );
        assert!(
            request.url.contains(url_contains),
            "Expected URL to contain '{}', got '{}'",
            url_contains,
            request.url
        );
    }

    /// Verify that a request carries a specific header.
    pub fn verify_header(&self, index: usize, header_name: &str, header_value: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {index}");

        let request = &requests[index];
        let actual_value = request.headers.get(header_name);
        assert_eq!(
            actual_value,
            Some(&header_value.to_string()),
            "Expected header '{header_name}' to be '{header_value}', got {actual_value:?}",
        );
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(TransportError::Connection(
                "No response configured in MockHttpTransport".into(),
            ))
        })
    }
}

/// Mock authentication manager for testing.
#[derive(Clone)]
pub struct MockAuthManager {
    token: Option<String>,
}

impl MockAuthManager {
    /// Create a mock auth manager with the given token.
    pub fn new(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    /// Create a mock auth manager without credentials.
    pub fn unauthenticated() -> Self {
        Self { token: None }
    }
}

impl AuthManager for MockAuthManager {
    fn get_auth_header(&self) -> Option<(String, String)> {
        self.token
            .as_ref()
            .map(|token| ("Authorization".to_string(), format!("Bearer {token}")))
    }

    fn clone_box(&self) -> Box<dyn AuthManager> {
        Box::new(self.clone())
    }
}
