//! HTTP response parsing.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

use super::http::HttpResponse;
use crate::error::{map_http_status_with_body, RateLimitError, ServerError, VertexError};

/// Parser for HTTP responses from the Google API surfaces.
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a successful HTTP response into the expected type, or maps an
    /// error response through the error taxonomy.
    pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, VertexError> {
        if (200..300).contains(&response.status) {
            let parsed: T = serde_json::from_slice(&response.body)?;
            Ok(parsed)
        } else {
            Err(Self::parse_error_response(response))
        }
    }

    /// Parses an error response into the appropriate error variant,
    /// honoring `Retry-After` headers where the variant carries one.
    pub fn parse_error_response(response: HttpResponse) -> VertexError {
        let retry_after = Self::parse_retry_after(&response.headers);
        let request_id = Self::extract_request_id(&response.headers);

        let mut error = map_http_status_with_body(response.status, &response.body);

        if let VertexError::RateLimit(ref mut rate_limit_error) = error {
            match rate_limit_error {
                RateLimitError::TooManyRequests { retry_after: ra }
                | RateLimitError::QuotaExceeded { retry_after: ra } => {
                    *ra = retry_after;
                }
            }
        }

        if let VertexError::Server(ServerError::ServiceUnavailable { retry_after: ref mut ra }) =
            error
        {
            *ra = retry_after;
        }

        if let Some(ref id) = request_id {
            tracing::debug!(
                request_id = %id,
                status = response.status,
                error = ?error,
                "API error occurred"
            );
        }

        error
    }

    /// Parses the `Retry-After` header (seconds form only).
    pub fn parse_retry_after(headers: &HashMap<String, String>) -> Option<Duration> {
        headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("retry-after"))
            .and_then(|(_, value)| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
    }

    /// Extracts the request id header for debugging, if present.
    pub fn extract_request_id(headers: &HashMap<String, String>) -> Option<String> {
        headers
            .iter()
            .find(|(key, _)| {
                key.eq_ignore_ascii_case("x-goog-request-id")
                    || key.eq_ignore_ascii_case("x-request-id")
            })
            .map(|(_, value)| value.clone())
    }
}
