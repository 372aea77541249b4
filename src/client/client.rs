//! Main client implementation.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::config::DeploymentConfig;
use crate::error::{NetworkError, VertexError, VertexResult};
use crate::model::GenerativeModel;
use crate::observability::Logger;
use crate::transport::{endpoints, HttpMethod, HttpTransport, RequestBuilder, ResponseParser};
use crate::types::PublisherModel;

use super::builder::VertexClientBuilder;
use super::traits::VertexClient;

/// Implementation of the Vertex client.
///
/// Bound to one `(project_id, region)` deployment at construction time.
/// Creating the client performs no remote calls; the first remote exchange
/// happens when a Model Handle is requested.
pub struct VertexClientImpl {
    config: Arc<DeploymentConfig>,
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
    logger: Arc<dyn Logger>,
}

impl VertexClientImpl {
    /// Creates a new client builder.
    pub fn builder() -> VertexClientBuilder {
        VertexClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// Reads `PROJECT_ID`, `REGION`, `GOOGLE_ACCESS_TOKEN`,
    /// `VERTEX_BASE_URL` and `VERTEX_TIMEOUT_SECS`. Absent project/region
    /// pass through as empty strings.
    pub fn from_env() -> VertexResult<Self> {
        let config = DeploymentConfig::from_env()?;
        Self::new(config)
    }

    /// Creates a client from a configuration object.
    pub fn new(config: DeploymentConfig) -> VertexResult<Self> {
        VertexClientBuilder::from_config(config).build()
    }

    /// Creates a client from pre-constructed parts (used by builder).
    pub(super) fn from_parts(
        config: DeploymentConfig,
        transport: Arc<dyn HttpTransport>,
        request_builder: RequestBuilder,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            request_builder,
            logger,
        }
    }
}

#[async_trait]
impl VertexClient for VertexClientImpl {
    async fn generative_model(&self, model: &str) -> VertexResult<GenerativeModel> {
        let path = endpoints::publisher_model(&self.config.project_id, &self.config.region, model);

        let http_request =
            self.request_builder
                .build_request::<()>(HttpMethod::Get, &path, None, None)?;

        let http_response = self.transport.send(http_request).await.map_err(|e| {
            let error = VertexError::Network(NetworkError::ConnectionFailed {
                message: e.to_string(),
            });

            self.logger.error(
                "Failed to fetch publisher model",
                json!({
                    "model": model,
                    "error": error.to_string(),
                }),
            );

            error
        })?;

        let info: PublisherModel = ResponseParser::parse_response(http_response)?;

        self.logger.info(
            "Model handle created",
            json!({
                "model": model,
                "resource": info.name,
                "version": info.version_id,
            }),
        );

        Ok(GenerativeModel::new(
            model.to_string(),
            info,
            Arc::clone(&self.config),
            Arc::clone(&self.transport),
            self.request_builder.clone(),
            Arc::clone(&self.logger),
        ))
    }

    fn config(&self) -> &DeploymentConfig {
        &self.config
    }
}

impl std::fmt::Debug for VertexClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexClientImpl")
            .field("project_id", &self.config.project_id)
            .field("region", &self.config.region)
            .finish()
    }
}

/// Create a client from configuration.
pub fn init_client(config: DeploymentConfig) -> VertexResult<Arc<dyn VertexClient>> {
    let client = VertexClientImpl::new(config)?;
    Ok(Arc::new(client))
}

/// Create a client from environment variables.
pub fn init_client_from_env() -> VertexResult<Arc<dyn VertexClient>> {
    let config = DeploymentConfig::from_env()?;
    init_client(config)
}
