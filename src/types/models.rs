//! Publisher model metadata types.

use serde::{Deserialize, Serialize};

/// Metadata for a publisher model as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublisherModel {
    /// The resource name, e.g. `publishers/google/models/gemini-pro`.
    pub name: String,
    /// The model version id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The launch stage (e.g. GA, PREVIEW).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_stage: Option<String>,
    /// The publisher model template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_model_template: Option<String>,
}

impl PublisherModel {
    /// The bare model id, without the publisher prefix.
    pub fn model_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id() {
        let model = PublisherModel {
            name: "publishers/google/models/gemini-pro".to_string(),
            version_id: Some("001".to_string()),
            display_name: None,
            description: None,
            launch_stage: None,
            publisher_model_template: None,
        };
        assert_eq!(model.model_id(), "gemini-pro");
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{
            "name": "publishers/google/models/gemini-pro",
            "versionId": "001",
            "displayName": "Gemini Pro",
            "launchStage": "GA"
        }"#;
        let model: PublisherModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.model_id(), "gemini-pro");
        assert_eq!(model.version_id.as_deref(), Some("001"));
        assert_eq!(model.launch_stage.as_deref(), Some("GA"));
    }
}
