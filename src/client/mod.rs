//! Vertex AI client: initialization bound to `(project_id, region)` and
//! construction of Model Handles.

mod builder;
mod client;
mod traits;

pub use builder::VertexClientBuilder;
pub use client::{init_client, init_client_from_env, VertexClientImpl};
pub use traits::VertexClient;
