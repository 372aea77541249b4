//! Builder for creating Vertex client instances.

use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::AccessTokenAuthManager;
use crate::config::{DeploymentConfig, LogLevel};
use crate::error::{NetworkError, VertexError, VertexResult};
use crate::observability::{Logger, StructuredLogger};
use crate::transport::{HttpTransport, RequestBuilder, ReqwestTransport};

use super::client::VertexClientImpl;

/// Builder for a [`VertexClientImpl`].
///
/// Provides a fluent API for configuring and constructing a client. Absent
/// `project_id`/`region` fall back to the environment and then to empty
/// strings — never to a local validation error; the remote initializer is
/// the arbiter of acceptability.
///
/// # Example
///
/// ```no_run
/// use vertex_story::client::VertexClientBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = VertexClientBuilder::new()
///     .project_id("demo")
///     .region("us-central1")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct VertexClientBuilder {
    project_id: Option<String>,
    region: Option<String>,
    access_token: Option<SecretString>,
    base_url: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    log_level: Option<LogLevel>,

    // Injectable dependencies for testing
    transport: Option<Arc<dyn HttpTransport>>,
    logger: Option<Arc<dyn Logger>>,
}

impl VertexClientBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            project_id: None,
            region: None,
            access_token: None,
            base_url: None,
            api_version: None,
            timeout: None,
            connect_timeout: None,
            log_level: None,
            transport: None,
            logger: None,
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: DeploymentConfig) -> Self {
        Self {
            project_id: Some(config.project_id.clone()),
            region: Some(config.region.clone()),
            access_token: config.access_token.clone(),
            base_url: config.base_url.as_ref().map(|u| u.to_string()),
            api_version: Some(config.api_version.clone()),
            timeout: Some(config.timeout),
            connect_timeout: Some(config.connect_timeout),
            log_level: Some(config.log_level),
            transport: None,
            logger: None,
        }
    }

    /// Sets the project identifier.
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Sets the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the OAuth access token.
    pub fn access_token(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets an explicit endpoint override.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Sets the log level for the client's structured logger.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Sets a custom HTTP transport (for testing).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom logger (for testing).
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint override is unparseable or the HTTP
    /// transport cannot be created. Absent project/region are not errors.
    pub fn build(self) -> VertexResult<VertexClientImpl> {
        // Resolution order: explicit -> environment -> empty (passed through).
        let project_id = self
            .project_id
            .or_else(|| std::env::var("PROJECT_ID").ok())
            .unwrap_or_default();

        let region = self
            .region
            .or_else(|| std::env::var("REGION").ok())
            .unwrap_or_default();

        let access_token = self.access_token.or_else(|| {
            std::env::var("GOOGLE_ACCESS_TOKEN")
                .ok()
                .map(SecretString::new)
        });

        let mut config_builder = DeploymentConfig::builder()
            .project_id(project_id)
            .region(region);

        if let Some(token) = access_token {
            config_builder = config_builder.access_token(token);
        }
        if let Some(ref base_url) = self.base_url {
            config_builder = config_builder.base_url(base_url)?;
        }
        if let Some(ref version) = self.api_version {
            config_builder = config_builder.api_version(version);
        }
        if let Some(timeout) = self.timeout {
            config_builder = config_builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            config_builder = config_builder.connect_timeout(connect_timeout);
        }
        if let Some(level) = self.log_level {
            config_builder = config_builder.log_level(level);
        }

        let config = config_builder.build();
        let endpoint = config.endpoint()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                ReqwestTransport::new(config.timeout, config.connect_timeout).map_err(|e| {
                    VertexError::Network(NetworkError::ConnectionFailed {
                        message: format!("Failed to create HTTP transport: {e}"),
                    })
                })?,
            ),
        };

        let request_builder = RequestBuilder::new(
            endpoint.clone(),
            config.api_version.clone(),
            Box::new(AccessTokenAuthManager::from_config(&config)),
        );

        let logger: Arc<dyn Logger> = self.logger.unwrap_or_else(|| {
            Arc::new(StructuredLogger::new("vertex.client").with_level(config.log_level))
        });

        logger.info(
            "Vertex client initialized",
            serde_json::json!({
                "project_id": config.project_id,
                "region": config.region,
                "endpoint": endpoint.as_str(),
                "api_version": config.api_version,
            }),
        );

        Ok(VertexClientImpl::from_parts(
            config,
            transport,
            request_builder,
            logger,
        ))
    }
}

impl Default for VertexClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
