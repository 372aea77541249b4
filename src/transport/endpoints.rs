//! Endpoint path builders for the Vertex AI and Cloud Logging surfaces.
//!
//! Paths are relative to the versioned base URL; [`super::RequestBuilder`]
//! prepends the API version segment.

/// Publisher namespace for Google first-party models.
pub const GOOGLE_PUBLISHER: &str = "publishers/google/models";

/// Normalize a model id into its publisher resource suffix.
///
/// Accepts either a bare id (`"gemini-pro"`) or a full suffix
/// (`"publishers/google/models/gemini-pro"`).
pub fn normalize_model_id(model: &str) -> String {
    if model.starts_with("publishers/") {
        model.to_string()
    } else {
        format!("{GOOGLE_PUBLISHER}/{model}")
    }
}

/// Path for fetching a publisher model's metadata.
pub fn publisher_model(project: &str, region: &str, model: &str) -> String {
    format!(
        "projects/{project}/locations/{region}/{}",
        normalize_model_id(model)
    )
}

/// Path for the generateContent method of a publisher model.
pub fn generate_content(project: &str, region: &str, model: &str) -> String {
    format!("{}:generateContent", publisher_model(project, region, model))
}

/// Path for writing Cloud Logging entries.
pub fn log_entries_write() -> String {
    "entries:write".to_string()
}
