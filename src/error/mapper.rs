//! Mapping from HTTP status codes and `google.rpc` error bodies to
//! [`VertexError`] variants.

use serde::Deserialize;

use super::categories::*;
use super::types::VertexError;

/// Error envelope returned by Google Cloud APIs.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

/// The `google.rpc.Status`-shaped error body.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Map a bare HTTP status code to an error, without body context.
pub fn map_http_status(status: u16) -> VertexError {
    map_status_and_message(status, "", format!("HTTP {status}"))
}

/// Map an HTTP status code plus response body to an error.
///
/// Parses the standard `{"error": {"code", "message", "status"}}` envelope
/// when present; falls back to the raw body text otherwise.
pub fn map_http_status_with_body(status: u16, body: &[u8]) -> VertexError {
    match serde_json::from_slice::<ApiErrorEnvelope>(body) {
        Ok(envelope) => {
            let code = if envelope.error.code != 0 {
                envelope.error.code
            } else {
                status
            };
            map_status_and_message(code, &envelope.error.status, envelope.error.message)
        }
        Err(_) => {
            let message = format!("HTTP {} - {}", status, String::from_utf8_lossy(body));
            map_status_and_message(status, "", message)
        }
    }
}

fn map_status_and_message(status: u16, rpc_status: &str, message: String) -> VertexError {
    match status {
        400 => VertexError::Request(RequestError::InvalidParameter {
            parameter: "request".to_string(),
            message,
        }),
        401 => VertexError::Authentication(AuthenticationError::InvalidToken),
        403 => {
            if rpc_status == "RESOURCE_EXHAUSTED" {
                VertexError::Authentication(AuthenticationError::QuotaExceeded)
            } else {
                VertexError::Authentication(AuthenticationError::PermissionDenied)
            }
        }
        404 => VertexError::Resource(ResourceError::ModelNotFound {
            model: extract_model_name(&message).unwrap_or_else(|| "unknown".to_string()),
        }),
        429 => VertexError::RateLimit(RateLimitError::TooManyRequests { retry_after: None }),
        503 => VertexError::Server(ServerError::ServiceUnavailable { retry_after: None }),
        500..=599 => VertexError::Server(ServerError::InternalError { message }),
        _ => VertexError::Response(ResponseError::UnexpectedFormat { message }),
    }
}

/// Best-effort extraction of a model id from a NOT_FOUND message.
///
/// Messages look like "Publisher Model `publishers/google/models/x` not found".
fn extract_model_name(message: &str) -> Option<String> {
    let marker = "models/";
    let start = message.find(marker)? + marker.len();
    let rest = &message[start..];
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '.' || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(rest[..end].to_string())
    }
}
