//! Wire types for the Vertex AI generation surface.

mod content;
mod generation;
mod models;
mod safety;

pub use content::*;
pub use generation::*;
pub use models::*;
pub use safety::*;
