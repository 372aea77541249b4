//! Client trait definitions.

use async_trait::async_trait;

use crate::config::DeploymentConfig;
use crate::error::VertexResult;
use crate::model::GenerativeModel;

/// Client bound to one `(project_id, region)` deployment.
#[async_trait]
pub trait VertexClient: Send + Sync {
    /// Request the named publisher model and return a handle bound to it.
    ///
    /// This contacts the remote service once per call; the cached accessor
    /// is responsible for calling it at most once per process.
    async fn generative_model(&self, model: &str) -> VertexResult<GenerativeModel>;

    /// The deployment configuration this client was initialized with.
    fn config(&self) -> &DeploymentConfig;
}
