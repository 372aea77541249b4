//! Application shell: the composition point.
//!
//! [`App::bootstrap`] performs the one-time startup sequence — tracing
//! subscriber, client initialization bound to `(project_id, region)`,
//! remote logging sink — and owns the cached Model Handle accessor. Every
//! bootstrap failure propagates to the caller; this process has no retry
//! policy and no degraded mode, because it cannot render its primary
//! content without the handle.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::client::{VertexClient, VertexClientBuilder};
use crate::config::{DeploymentConfig, DEFAULT_MODEL_NAME};
use crate::error::{NetworkError, VertexError, VertexResult};
use crate::model::GenerativeModel;
use crate::observability::{init_tracing, CloudLoggingSink, Severity};
use crate::provider::ModelProvider;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Rendering entry point for one interactive tab.
///
/// External collaborator: the contract is only that it accepts the shared
/// Model Handle. The repository ships a demo renderer as an example target,
/// not as part of this library.
#[async_trait]
pub trait TabRenderer: Send + Sync {
    /// Render the tab against the shared Model Handle.
    async fn render(&self, model: Arc<GenerativeModel>) -> VertexResult<()>;
}

/// The bootstrapped application shell.
pub struct App {
    config: DeploymentConfig,
    client: Arc<dyn VertexClient>,
    log_sink: CloudLoggingSink,
    provider: ModelProvider,
}

impl App {
    /// Bootstrap the shell with its own HTTP transport.
    pub async fn bootstrap(config: DeploymentConfig) -> VertexResult<Self> {
        let transport = Arc::new(
            ReqwestTransport::new(config.timeout, config.connect_timeout).map_err(|e| {
                VertexError::Network(NetworkError::ConnectionFailed {
                    message: format!("Failed to create HTTP transport: {e}"),
                })
            })?,
        );
        Self::bootstrap_with_transport(config, transport).await
    }

    /// Bootstrap the shell over an injected transport (tests, embedders).
    ///
    /// Startup order: tracing subscriber, client initialization, logging
    /// sink construction, one informational startup record. Any failure
    /// aborts the sequence and surfaces to the caller.
    pub async fn bootstrap_with_transport(
        config: DeploymentConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> VertexResult<Self> {
        init_tracing(&config);

        let client: Arc<dyn VertexClient> = Arc::new(
            VertexClientBuilder::from_config(config.clone())
                .transport(Arc::clone(&transport))
                .build()?,
        );

        let log_sink = CloudLoggingSink::new(&config, Arc::clone(&transport))?;
        log_sink
            .emit(
                Severity::Info,
                "bootstrap complete",
                json!({
                    "project_id": config.project_id,
                    "region": config.region,
                    "model": DEFAULT_MODEL_NAME,
                }),
            )
            .await?;

        let provider = ModelProvider::new(Arc::clone(&client), DEFAULT_MODEL_NAME);

        Ok(Self {
            config,
            client,
            log_sink,
            provider,
        })
    }

    /// The deployment configuration.
    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    /// The initialized client.
    pub fn client(&self) -> &Arc<dyn VertexClient> {
        &self.client
    }

    /// The remote logging sink.
    pub fn log_sink(&self) -> &CloudLoggingSink {
        &self.log_sink
    }

    /// The cached Model Handle accessor.
    pub fn provider(&self) -> &ModelProvider {
        &self.provider
    }

    /// Fetch the shared Model Handle and delegate to the tab renderer.
    ///
    /// The handle is constructed on the first call and reused afterwards;
    /// a construction failure propagates and the renderer is never invoked.
    pub async fn render_tab(&self, renderer: &dyn TabRenderer) -> VertexResult<()> {
        let model = self.provider.get_model_handle().await?;
        renderer.render(model).await
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("project_id", &self.config.project_id)
            .field("region", &self.config.region)
            .field("provider", &self.provider)
            .finish()
    }
}
