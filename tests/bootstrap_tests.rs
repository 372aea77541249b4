//! Integration tests for the bootstrap sequence and tab delegation.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vertex_story::app::{App, TabRenderer};
use vertex_story::mocks::MockHttpTransport;
use vertex_story::model::GenerativeModel;
use vertex_story::{DeploymentConfig, VertexError, VertexResult};

/// Serializes tests that mutate process environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const MODEL_JSON: &str = r#"{
    "name": "publishers/google/models/gemini-pro",
    "versionId": "001",
    "displayName": "Gemini Pro"
}"#;

const STORY_JSON: &str = r#"{
    "candidates": [
        {
            "content": {"role": "model", "parts": [{"text": "A story."}]},
            "finishReason": "STOP"
        }
    ],
    "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 2, "totalTokenCount": 5}
}"#;

/// Renderer that records whether it ran and what it generated.
struct RecordingRenderer {
    rendered: AtomicBool,
    story: Mutex<Option<String>>,
}

impl RecordingRenderer {
    fn new() -> Self {
        Self {
            rendered: AtomicBool::new(false),
            story: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TabRenderer for RecordingRenderer {
    async fn render(&self, model: Arc<GenerativeModel>) -> VertexResult<()> {
        self.rendered.store(true, Ordering::SeqCst);
        let story = model.generate_text("Tell me a story.").await?;
        *self.story.lock().unwrap() = Some(story);
        Ok(())
    }
}

#[tokio::test]
async fn test_bootstrap_and_render_end_to_end() {
    // Arrange - a real HTTP server standing in for both remote surfaces.
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/entries:write"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(
            "/v1/projects/demo/locations/us-central1/publishers/google/models/gemini-pro",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(MODEL_JSON, "application/json"),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(
            "/v1/projects/demo/locations/us-central1/publishers/google/models/gemini-pro:generateContent",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(STORY_JSON, "application/json"),
        )
        .mount(&server)
        .await;

    let config = DeploymentConfig::builder()
        .project_id("demo")
        .region("us-central1")
        .base_url(&server.uri())
        .unwrap()
        .logging_url(&server.uri())
        .unwrap()
        .build();

    // Act
    let app = App::bootstrap(config).await.unwrap();
    let renderer = RecordingRenderer::new();
    app.render_tab(&renderer).await.unwrap();

    // Assert
    assert!(renderer.rendered.load(Ordering::SeqCst));
    assert_eq!(renderer.story.lock().unwrap().as_deref(), Some("A story."));

    // The handle is shared: a second render re-uses it.
    let second = RecordingRenderer::new();
    app.render_tab(&second).await.unwrap();
    assert!(second.rendered.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_bootstrap_emits_startup_record() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, "{}");

    let config = DeploymentConfig::builder()
        .project_id("demo")
        .region("us-central1")
        .build();

    // Act
    let app = App::bootstrap_with_transport(config, transport.clone())
        .await
        .unwrap();

    // Assert - exactly one remote exchange so far: the startup record.
    transport.verify_request_count(1);
    let request = transport.last_request().unwrap();
    assert!(request.url.contains("v2/entries:write"));

    let body: serde_json::Value =
        serde_json::from_slice(request.body.as_ref().unwrap()).unwrap();
    assert_eq!(
        body["entries"][0]["logName"],
        "projects/demo/logs/vertex-story"
    );
    assert_eq!(app.provider().model_name(), "gemini-pro");
}

#[tokio::test]
async fn test_bootstrap_fails_when_sink_write_fails() {
    // Arrange - logging sink failure is a startup failure like any other.
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        403,
        r#"{"error": {"code": 403, "message": "denied", "status": "PERMISSION_DENIED"}}"#,
    );

    let config = DeploymentConfig::builder()
        .project_id("demo")
        .region("us-central1")
        .build();

    // Act
    let result = App::bootstrap_with_transport(config, transport).await;

    // Assert
    assert!(matches!(result, Err(VertexError::Authentication(_))));
}

#[tokio::test]
async fn test_render_not_reached_when_model_fetch_fails() {
    // Arrange - startup record succeeds, model fetch fails.
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, "{}");
    transport.enqueue_json_response(
        503,
        r#"{"error": {"code": 503, "message": "unavailable", "status": "UNAVAILABLE"}}"#,
    );

    let config = DeploymentConfig::builder()
        .project_id("demo")
        .region("us-central1")
        .build();

    let app = App::bootstrap_with_transport(config, transport.clone())
        .await
        .unwrap();

    // Act
    let renderer = RecordingRenderer::new();
    let result = app.render_tab(&renderer).await;

    // Assert - the failure propagated and the tab never rendered.
    assert!(matches!(result, Err(VertexError::Server(_))));
    assert!(!renderer.rendered.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_from_env_carries_absent_values_through() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::remove_var("PROJECT_ID");
    std::env::remove_var("REGION");
    std::env::remove_var("GOOGLE_ACCESS_TOKEN");
    std::env::remove_var("VERTEX_BASE_URL");
    std::env::remove_var("VERTEX_TIMEOUT_SECS");

    // Absent variables do not short-circuit configuration loading.
    let config = DeploymentConfig::from_env().unwrap();
    assert_eq!(config.project_id, "");
    assert_eq!(config.region, "");

    // Bootstrap still goes ahead; the failure, when it comes, is remote.
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, "{}");
    transport.enqueue_json_response(
        400,
        r#"{"error": {"code": 400, "message": "Invalid resource name", "status": "INVALID_ARGUMENT"}}"#,
    );

    let app = App::bootstrap_with_transport(config, transport.clone())
        .await
        .unwrap();
    let result = app.provider().get_model_handle().await;

    assert!(matches!(result, Err(VertexError::Request(_))));
    transport.verify_request_count(2);
    let request = transport.last_request().unwrap();
    assert!(request.url.contains("projects//locations//"));
}

#[tokio::test]
async fn test_from_env_reads_deployment() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("PROJECT_ID", "demo");
    std::env::set_var("REGION", "us-central1");

    let config = DeploymentConfig::from_env().unwrap();

    std::env::remove_var("PROJECT_ID");
    std::env::remove_var("REGION");

    assert_eq!(config.project_id, "demo");
    assert_eq!(config.region, "us-central1");
    assert_eq!(
        config.endpoint().unwrap().as_str(),
        "https://us-central1-aiplatform.googleapis.com/"
    );
}
