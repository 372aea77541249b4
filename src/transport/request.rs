//! HTTP request builder.
//!
//! Constructs transport-level requests with the versioned URL, JSON body
//! and authentication header supplied by the configured [`AuthManager`].

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

use super::http::{HttpMethod, HttpRequest};
use crate::auth::AuthManager;
use crate::error::VertexResult;

/// Builder for constructing HTTP requests to a versioned Google API surface.
pub struct RequestBuilder {
    /// Base URL for the API.
    base_url: Url,
    /// API version segment (e.g., "v1", "v2").
    api_version: String,
    /// Authentication manager.
    auth_manager: Box<dyn AuthManager>,
}

impl RequestBuilder {
    /// Creates a new request builder.
    pub fn new(base_url: Url, api_version: String, auth_manager: Box<dyn AuthManager>) -> Self {
        Self {
            base_url,
            api_version,
            auth_manager,
        }
    }

    /// Builds a complete URL for the given path, prepending the API version.
    pub fn build_url(&self, path: &str) -> VertexResult<Url> {
        let path = path.trim_start_matches('/');
        let full_path = format!("{}/{}", self.api_version, path);
        Ok(self.base_url.join(&full_path)?)
    }

    /// Builds an HTTP request with an optional JSON body and extra headers.
    pub fn build_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
        extra_headers: Option<HashMap<String, String>>,
    ) -> VertexResult<HttpRequest> {
        let url = self.build_url(path)?;

        let mut headers = HashMap::new();

        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        if let Some((key, value)) = self.auth_manager.get_auth_header() {
            headers.insert(key, value);
        }

        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let body = match body {
            Some(value) => Some(Bytes::from(serde_json::to_vec(value)?)),
            None => None,
        };

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
        })
    }
}

impl Clone for RequestBuilder {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            auth_manager: self.auth_manager.clone_box(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockAuthManager;

    fn builder_with_token() -> RequestBuilder {
        RequestBuilder::new(
            Url::parse("https://us-central1-aiplatform.googleapis.com").unwrap(),
            "v1".to_string(),
            Box::new(MockAuthManager::new("test-token")),
        )
    }

    #[test]
    fn test_build_url_prepends_version() {
        let builder = builder_with_token();
        let url = builder.build_url("projects/demo/locations/us-central1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/demo/locations/us-central1"
        );
    }

    #[test]
    fn test_build_request_sets_auth_and_content_type() {
        let builder = builder_with_token();

        #[derive(Serialize)]
        struct Body {
            prompt: String,
        }

        let request = builder
            .build_request(
                HttpMethod::Post,
                "projects/demo/x:generateContent",
                Some(&Body {
                    prompt: "hi".to_string(),
                }),
                None,
            )
            .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.headers.get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert!(request.body.is_some());
    }

    #[test]
    fn test_build_request_without_token_has_no_auth_header() {
        let builder = RequestBuilder::new(
            Url::parse("https://us-central1-aiplatform.googleapis.com").unwrap(),
            "v1".to_string(),
            Box::new(MockAuthManager::unauthenticated()),
        );

        let request = builder
            .build_request::<()>(HttpMethod::Get, "projects/demo", None, None)
            .unwrap();

        assert!(request.headers.get("Authorization").is_none());
        assert!(request.body.is_none());
    }
}
