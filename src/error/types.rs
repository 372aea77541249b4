//! Main error type for the Vertex AI demo shell.

use std::time::Duration;
use thiserror::Error;
use super::categories::*;

/// Result type alias for Vertex operations.
pub type VertexResult<T> = Result<T, VertexError>;

/// Top-level error type for the Vertex integration.
///
/// Every failure on the bootstrap and generation paths funnels into this
/// enum; there is no retry or degraded-mode layer, so callers propagate it
/// up to the process entry point.
#[derive(Error, Debug, Clone)]
pub enum VertexError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

impl VertexError {
    /// Returns the server-provided retry-after hint if available.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            VertexError::RateLimit(e) => e.retry_after(),
            VertexError::Server(ServerError::ServiceUnavailable { retry_after }) => *retry_after,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VertexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            VertexError::Network(NetworkError::Timeout {
                duration: Duration::from_secs(0), // actual duration unknown
            })
        } else {
            VertexError::Network(NetworkError::ConnectionFailed {
                message: err.to_string(),
            })
        }
    }
}

impl From<serde_json::Error> for VertexError {
    fn from(err: serde_json::Error) -> Self {
        VertexError::Response(ResponseError::DeserializationError {
            message: err.to_string(),
        })
    }
}

impl From<url::ParseError> for VertexError {
    fn from(err: url::ParseError) -> Self {
        VertexError::Configuration(ConfigurationError::InvalidBaseUrl {
            url: err.to_string(),
        })
    }
}
