//! Remote logging sink backed by the Cloud Logging API.
//!
//! The sink ships structured records at informational level and above via
//! `entries:write`, through the same transport abstraction the Vertex
//! client uses. Constructing the sink is part of bootstrap and failure
//! there is startup-fatal; emission failures afterwards are returned to
//! the caller as ordinary errors, never retried.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::AccessTokenAuthManager;
use crate::config::DeploymentConfig;
use crate::error::{NetworkError, VertexError, VertexResult};
use crate::transport::{endpoints, HttpMethod, HttpTransport, RequestBuilder, ResponseParser};

/// Cloud Logging API version.
const LOGGING_API_VERSION: &str = "v2";

/// Log id under which the shell writes its records.
const LOG_ID: &str = "vertex-story";

/// Severity of a log entry, in Cloud Logging's vocabulary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// No assigned severity.
    Default,
    /// Debug or trace information.
    Debug,
    /// Routine information.
    Info,
    /// Something unexpected but recoverable.
    Warning,
    /// A failure.
    Error,
}

/// A single structured log entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// The log resource name.
    pub log_name: String,
    /// The entry severity.
    pub severity: Severity,
    /// The structured payload.
    pub json_payload: Value,
    /// The monitored resource the entry belongs to.
    pub resource: MonitoredResource,
    /// Unique id for deduplication on the service side.
    pub insert_id: String,
}

/// The monitored resource descriptor attached to each entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitoredResource {
    /// The resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WriteEntriesRequest {
    entries: Vec<LogEntry>,
}

/// Remote logging sink bound to one project's log stream.
pub struct CloudLoggingSink {
    log_name: String,
    request_builder: RequestBuilder,
    transport: Arc<dyn HttpTransport>,
}

impl CloudLoggingSink {
    /// Construct the sink for the configured project.
    ///
    /// Fails when the logging endpoint cannot be resolved; bootstrap treats
    /// that like any other startup failure.
    pub fn new(
        config: &DeploymentConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> VertexResult<Self> {
        let endpoint = config.logging_endpoint()?;
        let request_builder = RequestBuilder::new(
            endpoint,
            LOGGING_API_VERSION.to_string(),
            Box::new(AccessTokenAuthManager::from_config(config)),
        );

        Ok(Self {
            log_name: format!("projects/{}/logs/{}", config.project_id, LOG_ID),
            request_builder,
            transport,
        })
    }

    /// The log resource name this sink writes to.
    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    /// Ship one structured record to the remote sink.
    ///
    /// Records below informational severity are dropped locally; the local
    /// tracing subscriber already covers them.
    pub async fn emit(
        &self,
        severity: Severity,
        message: &str,
        fields: Value,
    ) -> VertexResult<()> {
        if severity < Severity::Info {
            return Ok(());
        }

        let entry = LogEntry {
            log_name: self.log_name.clone(),
            severity,
            json_payload: json!({
                "message": message,
                "fields": fields,
            }),
            resource: MonitoredResource {
                resource_type: "global".to_string(),
            },
            insert_id: Uuid::new_v4().to_string(),
        };

        let request = self.request_builder.build_request(
            HttpMethod::Post,
            &endpoints::log_entries_write(),
            Some(&WriteEntriesRequest {
                entries: vec![entry],
            }),
            None,
        )?;

        let response = self.transport.send(request).await.map_err(|e| {
            VertexError::Network(NetworkError::ConnectionFailed {
                message: e.to_string(),
            })
        })?;

        if !(200..300).contains(&response.status) {
            return Err(ResponseParser::parse_error_response(response));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockHttpTransport;

    fn sink_with(transport: Arc<MockHttpTransport>) -> CloudLoggingSink {
        let config = DeploymentConfig::builder()
            .project_id("demo")
            .region("us-central1")
            .build();
        CloudLoggingSink::new(&config, transport).unwrap()
    }

    #[tokio::test]
    async fn test_emit_writes_entry() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.enqueue_json_response(200, "{}");

        let sink = sink_with(transport.clone());
        sink.emit(Severity::Info, "bootstrap complete", json!({"model": "gemini-pro"}))
            .await
            .unwrap();

        transport.verify_request_count(1);
        let request = transport.last_request().unwrap();
        assert!(request.url.contains("v2/entries:write"));

        let body: Value = serde_json::from_slice(request.body.as_ref().unwrap()).unwrap();
        assert_eq!(
            body["entries"][0]["logName"],
            "projects/demo/logs/vertex-story"
        );
        assert_eq!(body["entries"][0]["severity"], "INFO");
        assert_eq!(
            body["entries"][0]["jsonPayload"]["message"],
            "bootstrap complete"
        );
    }

    #[tokio::test]
    async fn test_emit_drops_below_info() {
        let transport = Arc::new(MockHttpTransport::new());

        let sink = sink_with(transport.clone());
        sink.emit(Severity::Debug, "noise", json!({})).await.unwrap();

        transport.verify_request_count(0);
    }

    #[tokio::test]
    async fn test_emit_surfaces_remote_error() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.enqueue_json_response(
            403,
            r#"{"error": {"code": 403, "message": "denied", "status": "PERMISSION_DENIED"}}"#,
        );

        let sink = sink_with(transport.clone());
        let result = sink.emit(Severity::Error, "boom", json!({})).await;
        assert!(matches!(result, Err(VertexError::Authentication(_))));
    }
}
