//! Error category types for granular error handling.

use std::time::Duration;
use thiserror::Error;

/// Configuration-related errors.
///
/// Absent `PROJECT_ID`/`REGION` are deliberately NOT configuration errors:
/// they pass through to the remote initializer, which decides acceptability.
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Authentication-related errors.
#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid or expired access token")]
    InvalidToken,

    #[error("Permission denied for project or model")]
    PermissionDenied,

    #[error("Quota exceeded for credentials")]
    QuotaExceeded,
}

/// Request validation errors.
#[derive(Error, Debug, Clone)]
pub enum RequestError {
    #[error("Invalid model: {model}")]
    InvalidModel { model: String },

    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },

    #[error("Empty request: {message}")]
    EmptyRequest { message: String },
}

/// Rate limiting errors.
#[derive(Error, Debug, Clone)]
pub enum RateLimitError {
    #[error("Too many requests")]
    TooManyRequests { retry_after: Option<Duration> },

    #[error("Quota exceeded")]
    QuotaExceeded { retry_after: Option<Duration> },
}

impl RateLimitError {
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            RateLimitError::TooManyRequests { retry_after } => *retry_after,
            RateLimitError::QuotaExceeded { retry_after } => *retry_after,
        }
    }
}

/// Network-related errors.
#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },
}

/// Server-side errors.
#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {message}")]
    InternalError { message: String },

    #[error("Service unavailable")]
    ServiceUnavailable { retry_after: Option<Duration> },

    #[error("Model overloaded: {model}")]
    ModelOverloaded { model: String },
}

/// Response parsing errors.
#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    #[error("Failed to deserialize response: {message}")]
    DeserializationError { message: String },

    #[error("Unexpected response format: {message}")]
    UnexpectedFormat { message: String },

    #[error("Response contained no candidates")]
    EmptyCandidates,
}

/// Resource-related errors.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Model not found: {model}")]
    ModelNotFound { model: String },
}

/// Content safety errors.
#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Content blocked due to safety: {reason}")]
    SafetyBlocked {
        reason: String,
        safety_ratings: Vec<SafetyRatingInfo>,
    },

    #[error("Content blocked due to recitation")]
    RecitationBlocked {
        safety_ratings: Vec<SafetyRatingInfo>,
    },

    #[error("Prohibited content detected")]
    ProhibitedContent,
}

/// Information about a safety rating for error reporting.
#[derive(Debug, Clone)]
pub struct SafetyRatingInfo {
    pub category: String,
    pub probability: String,
}
