//! Integration tests for the cached model accessor.

use std::sync::Arc;

use vertex_story::client::{VertexClient, VertexClientBuilder};
use vertex_story::mocks::MockHttpTransport;
use vertex_story::provider::ModelProvider;
use vertex_story::transport::HttpMethod;
use vertex_story::VertexError;

const MODEL_JSON: &str = r#"{
    "name": "publishers/google/models/gemini-pro",
    "versionId": "001",
    "displayName": "Gemini Pro",
    "launchStage": "GA"
}"#;

/// Helper to build a provider over a mock transport.
fn create_provider(transport: Arc<MockHttpTransport>) -> ModelProvider {
    let client: Arc<dyn VertexClient> = Arc::new(
        VertexClientBuilder::new()
            .project_id("demo")
            .region("us-central1")
            .transport(transport)
            .build()
            .unwrap(),
    );

    ModelProvider::new(client, "gemini-pro")
}

#[tokio::test]
async fn test_handle_records_model_name() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, MODEL_JSON);

    let provider = create_provider(transport.clone());

    // Act
    let handle = provider.get_model_handle().await.unwrap();

    // Assert
    assert_eq!(handle.name(), "gemini-pro");
    assert_eq!(handle.info().model_id(), "gemini-pro");
    assert_eq!(handle.info().version_id.as_deref(), Some("001"));

    transport.verify_request_count(1);
    transport.verify_request(
        0,
        HttpMethod::Get,
        "projects/demo/locations/us-central1/publishers/google/models/gemini-pro",
    );
}

#[tokio::test]
async fn test_repeated_calls_return_identical_handle() {
    // Arrange - only one response is enqueued; a second fetch would fail.
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, MODEL_JSON);

    let provider = create_provider(transport.clone());

    // Act
    let first = provider.get_model_handle().await.unwrap();
    let second = provider.get_model_handle().await.unwrap();

    // Assert - identical handle, exactly one remote call.
    assert!(Arc::ptr_eq(&first, &second));
    transport.verify_request_count(1);
}

#[tokio::test]
async fn test_concurrent_first_calls_share_one_fetch() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, MODEL_JSON);

    let provider = Arc::new(create_provider(transport.clone()));

    // Act - two callers race the uninitialized slot.
    let (a, b) = tokio::join!(provider.get_model_handle(), provider.get_model_handle());

    // Assert
    let a = a.unwrap();
    let b = b.unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    transport.verify_request_count(1);
}

#[tokio::test]
async fn test_first_call_failure_propagates() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        404,
        r#"{"error": {"code": 404, "message": "Publisher Model `publishers/google/models/gemini-pro` not found", "status": "NOT_FOUND"}}"#,
    );

    let provider = create_provider(transport.clone());

    // Act
    let result = provider.get_model_handle().await;

    // Assert
    match result {
        Err(VertexError::Resource(_)) => {}
        other => panic!("Expected ResourceError, got {other:?}"),
    }
    transport.verify_request_count(1);
}

#[tokio::test]
async fn test_absent_deployment_still_attempts_remote_call() {
    // Arrange - empty project/region must not short-circuit locally.
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        400,
        r#"{"error": {"code": 400, "message": "Invalid resource name", "status": "INVALID_ARGUMENT"}}"#,
    );

    let client: Arc<dyn VertexClient> = Arc::new(
        VertexClientBuilder::new()
            .project_id("")
            .region("")
            .base_url("https://example.invalid")
            .transport(transport.clone())
            .build()
            .unwrap(),
    );
    let provider = ModelProvider::new(client, "gemini-pro");

    // Act
    let result = provider.get_model_handle().await;

    // Assert - the failure came back from the remote exchange.
    assert!(matches!(result, Err(VertexError::Request(_))));
    transport.verify_request_count(1);
    let request = transport.last_request().unwrap();
    assert!(request.url.contains("projects//locations//"));
}

#[tokio::test]
async fn test_model_name_accessor() {
    let transport = Arc::new(MockHttpTransport::new());
    let provider = create_provider(transport);
    assert_eq!(provider.model_name(), "gemini-pro");
}
