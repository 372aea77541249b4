//! # Vertex AI Gemini Demo Shell
//!
//! Minimal front-end shell for a Vertex AI Gemini story demo: reads the
//! deployment from the environment, initializes the remote client and
//! logging sink once at startup, memoizes a single Model Handle for the
//! process lifetime, and delegates rendering to an external tab renderer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vertex_story::{App, DeploymentConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PROJECT_ID / REGION; absent values pass through to the
//!     // remote initializer, which decides acceptability.
//!     let config = DeploymentConfig::from_env()?;
//!     let app = App::bootstrap(config).await?;
//!
//!     let model = app.provider().get_model_handle().await?;
//!     let _story = model.generate_text("Tell me a very short story.").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `config` - Deployment configuration read once at startup
//! - `client` - Client initialization bound to `(project_id, region)`
//! - `model` - The Model Handle and its generation operation
//! - `provider` - Single-slot cached accessor for the handle
//! - `app` - Composition point and tab-renderer delegation
//! - `observability` - Tracing setup and the Cloud Logging sink
//! - `auth` / `transport` / `types` / `error` - plumbing underneath

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod provider;
pub mod transport;
pub mod types;

// Development/testing modules - always available for integration tests
pub mod mocks;

// Re-exports for convenience
pub use app::{App, TabRenderer};
pub use auth::{AccessTokenAuthManager, AuthManager};
pub use client::{init_client, init_client_from_env, VertexClient, VertexClientBuilder, VertexClientImpl};
pub use config::{
    DeploymentConfig, DeploymentConfigBuilder, LogLevel, DEFAULT_API_VERSION,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MODEL_NAME, DEFAULT_TIMEOUT_SECS,
};
pub use error::{
    // Main error types
    VertexError,
    VertexResult,
    // Error categories
    AuthenticationError,
    ConfigurationError,
    ContentError,
    NetworkError,
    RateLimitError,
    RequestError,
    ResourceError,
    ResponseError,
    ServerError,
    // Error mapping utilities
    map_http_status,
    map_http_status_with_body,
};
pub use model::GenerativeModel;
pub use observability::{init_tracing, CloudLoggingSink, Logger, Severity, StructuredLogger};
pub use provider::ModelProvider;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBuilder, ReqwestTransport,
    ResponseParser, TransportError,
};

// Type re-exports
pub use types::{
    // Content types
    Blob, Content, Part, Role,
    // Safety types
    HarmBlockThreshold, HarmCategory, HarmProbability, SafetyRating, SafetySetting,
    // Generation types
    BlockReason, Candidate, FinishReason, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, PromptFeedback, UsageMetadata,
    // Model types
    PublisherModel,
};
