//! Deployment configuration for the demo shell.
//!
//! Configuration is an explicit struct populated once at startup — from the
//! process environment via [`DeploymentConfig::from_env`], or through the
//! builder in tests and embedders. `PROJECT_ID` and `REGION` are read as-is:
//! absent values become empty strings and are passed through to the remote
//! client initializer, which decides acceptability.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use crate::error::{ConfigurationError, VertexError, VertexResult};

/// Default model requested by the demo shell.
pub const DEFAULT_MODEL_NAME: &str = "gemini-pro";

/// Default API version for the Vertex AI endpoint.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default base URL of the Cloud Logging API.
pub const DEFAULT_LOGGING_BASE_URL: &str = "https://logging.googleapis.com";

/// Default request timeout (120 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Log level for the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Error level - only errors.
    Error,
    /// Warning level - errors and warnings.
    Warn,
    /// Info level - general information.
    #[default]
    Info,
    /// Debug level - detailed information.
    Debug,
    /// Trace level - very detailed information.
    Trace,
}

/// Deployment configuration, immutable for the process lifetime.
#[derive(Clone)]
pub struct DeploymentConfig {
    /// Cloud project identifier. May be empty; not validated locally.
    pub project_id: String,
    /// Geographic region / endpoint selector. May be empty; not validated locally.
    pub region: String,
    /// OAuth access token. Absent means unauthenticated requests.
    pub access_token: Option<SecretString>,
    /// Explicit Vertex endpoint override (tests, emulators).
    pub base_url: Option<Url>,
    /// Explicit Cloud Logging endpoint override (tests).
    pub logging_url: Option<Url>,
    /// API version segment.
    pub api_version: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Minimum level for structured logging.
    pub log_level: LogLevel,
}

impl DeploymentConfig {
    /// Create a new configuration builder.
    pub fn builder() -> DeploymentConfigBuilder {
        DeploymentConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `PROJECT_ID`, `REGION` (absent values carried as empty strings)
    /// - `GOOGLE_ACCESS_TOKEN` (optional)
    /// - `VERTEX_BASE_URL` (optional endpoint override)
    /// - `VERTEX_TIMEOUT_SECS` (optional)
    pub fn from_env() -> VertexResult<Self> {
        let mut builder = Self::builder()
            .project_id(std::env::var("PROJECT_ID").unwrap_or_default())
            .region(std::env::var("REGION").unwrap_or_default());

        if let Ok(token) = std::env::var("GOOGLE_ACCESS_TOKEN") {
            builder = builder.access_token(SecretString::new(token));
        }

        if let Ok(base_url) = std::env::var("VERTEX_BASE_URL") {
            builder = builder.base_url(&base_url)?;
        }

        if let Ok(secs) = std::env::var("VERTEX_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                VertexError::Configuration(ConfigurationError::InvalidConfiguration {
                    message: format!("VERTEX_TIMEOUT_SECS is not a number: {secs}"),
                })
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build())
    }

    /// The Vertex AI endpoint this configuration resolves to.
    ///
    /// An explicit override wins; otherwise the regional host is derived
    /// from whatever `region` holds. An empty region yields a host that no
    /// resolver knows, so the failure surfaces from the remote exchange,
    /// not from here.
    pub fn endpoint(&self) -> VertexResult<Url> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => {
                let raw = format!("https://{}-aiplatform.googleapis.com", self.region);
                Url::parse(&raw).map_err(|_| {
                    VertexError::Configuration(ConfigurationError::InvalidBaseUrl { url: raw })
                })
            }
        }
    }

    /// The Cloud Logging endpoint this configuration resolves to.
    pub fn logging_endpoint(&self) -> VertexResult<Url> {
        match &self.logging_url {
            Some(url) => Ok(url.clone()),
            None => Url::parse(DEFAULT_LOGGING_BASE_URL).map_err(|_| {
                VertexError::Configuration(ConfigurationError::InvalidBaseUrl {
                    url: DEFAULT_LOGGING_BASE_URL.to_string(),
                })
            }),
        }
    }

    /// The `projects/{project}/locations/{region}` resource prefix.
    pub fn parent_path(&self) -> String {
        format!("projects/{}/locations/{}", self.project_id, self.region)
    }
}

impl std::fmt::Debug for DeploymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeploymentConfig")
            .field("project_id", &self.project_id)
            .field("region", &self.region)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`DeploymentConfig`].
#[derive(Default)]
pub struct DeploymentConfigBuilder {
    project_id: Option<String>,
    region: Option<String>,
    access_token: Option<SecretString>,
    base_url: Option<Url>,
    logging_url: Option<Url>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    log_level: Option<LogLevel>,
}

impl DeploymentConfigBuilder {
    /// Set the project identifier.
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Set the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the OAuth access token.
    pub fn access_token(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Override the Vertex endpoint.
    pub fn base_url(mut self, base_url: &str) -> VertexResult<Self> {
        let url = Url::parse(base_url).map_err(|_| {
            VertexError::Configuration(ConfigurationError::InvalidBaseUrl {
                url: base_url.to_string(),
            })
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Override the Cloud Logging endpoint.
    pub fn logging_url(mut self, logging_url: &str) -> VertexResult<Self> {
        let url = Url::parse(logging_url).map_err(|_| {
            VertexError::Configuration(ConfigurationError::InvalidBaseUrl {
                url: logging_url.to_string(),
            })
        })?;
        self.logging_url = Some(url);
        Ok(self)
    }

    /// Set the API version.
    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = Some(version.to_string());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Build the configuration.
    ///
    /// Nothing is required: absent project/region are carried as empty
    /// strings by design.
    pub fn build(self) -> DeploymentConfig {
        DeploymentConfig {
            project_id: self.project_id.unwrap_or_default(),
            region: self.region.unwrap_or_default(),
            access_token: self.access_token,
            base_url: self.base_url,
            logging_url: self.logging_url,
            api_version: self.api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout: self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: self
                .connect_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            log_level: self.log_level.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeploymentConfig::builder()
            .project_id("demo")
            .region("us-central1")
            .build();

        assert_eq!(config.project_id, "demo");
        assert_eq!(config.region, "us-central1");
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_endpoint_from_region() {
        let config = DeploymentConfig::builder()
            .project_id("demo")
            .region("us-central1")
            .build();

        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://us-central1-aiplatform.googleapis.com/"
        );
    }

    #[test]
    fn test_endpoint_override() {
        let config = DeploymentConfig::builder()
            .base_url("http://localhost:8080")
            .unwrap()
            .build();

        assert_eq!(config.endpoint().unwrap().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_missing_values_pass_through() {
        // Absent project/region build fine; acceptability is the remote
        // initializer's call.
        let config = DeploymentConfig::builder().build();
        assert_eq!(config.project_id, "");
        assert_eq!(config.region, "");
        assert!(config.endpoint().is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = DeploymentConfig::builder().base_url("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_parent_path() {
        let config = DeploymentConfig::builder()
            .project_id("demo")
            .region("us-central1")
            .build();
        assert_eq!(config.parent_path(), "projects/demo/locations/us-central1");
    }
}
