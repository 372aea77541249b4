//! Cached Model Accessor.
//!
//! A single-slot memoization of the Model Handle, owned by the composition
//! point and passed by reference to whatever needs it. The slot has two
//! observable states — uninitialized and initialized — and one irreversible
//! transition on the first successful access. It is never invalidated or
//! refreshed for the process lifetime.

use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::client::VertexClient;
use crate::error::{VertexError, VertexResult};
use crate::model::GenerativeModel;

/// Provider of the process-wide shared Model Handle.
pub struct ModelProvider {
    client: Arc<dyn VertexClient>,
    model_name: String,
    handle: OnceCell<Arc<GenerativeModel>>,
}

impl ModelProvider {
    /// Create a provider for the named model. No remote call happens here.
    pub fn new(client: Arc<dyn VertexClient>, model_name: impl Into<String>) -> Self {
        Self {
            client,
            model_name: model_name.into(),
            handle: OnceCell::new(),
        }
    }

    /// The model name this provider resolves.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Return the shared Model Handle.
    ///
    /// The first invocation requests the named model from the client — one
    /// remote call, whose failure propagates and leaves the slot empty. All
    /// later invocations return the identical handle without contacting the
    /// service again. Concurrent first callers wait on the same guarded
    /// initialization and observe the single result.
    pub async fn get_model_handle(&self) -> VertexResult<Arc<GenerativeModel>> {
        let handle = self
            .handle
            .get_or_try_init(|| async {
                let model = self.client.generative_model(&self.model_name).await?;
                Ok::<_, VertexError>(Arc::new(model))
            })
            .await?;

        Ok(Arc::clone(handle))
    }
}

impl std::fmt::Debug for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelProvider")
            .field("model_name", &self.model_name)
            .field("initialized", &self.handle.initialized())
            .finish()
    }
}
