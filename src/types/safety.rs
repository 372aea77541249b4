//! Safety types for content generation.

use serde::{Deserialize, Serialize};

/// Harm category for safety settings and ratings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    HarmCategoryUnspecified,
    HarmCategoryHateSpeech,
    HarmCategoryDangerousContent,
    HarmCategoryHarassment,
    HarmCategorySexuallyExplicit,
}

/// Probability that content falls into a harm category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmProbability {
    HarmProbabilityUnspecified,
    Negligible,
    Low,
    Medium,
    High,
}

/// Threshold at which a harm category blocks content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    HarmBlockThresholdUnspecified,
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

/// A safety rating attached to a prompt or candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    /// The rated category.
    pub category: HarmCategory,
    /// The assessed probability.
    pub probability: HarmProbability,
    /// Whether this rating blocked the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
}

/// A safety setting for a generation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SafetySetting {
    /// The category to configure.
    pub category: HarmCategory,
    /// The blocking threshold.
    pub threshold: HarmBlockThreshold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_rating_deserialization() {
        let json = r#"{"category": "HARM_CATEGORY_HATE_SPEECH", "probability": "NEGLIGIBLE"}"#;
        let rating: SafetyRating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.category, HarmCategory::HarmCategoryHateSpeech);
        assert_eq!(rating.probability, HarmProbability::Negligible);
        assert_eq!(rating.blocked, None);
    }

    #[test]
    fn test_safety_setting_serialization() {
        let setting = SafetySetting {
            category: HarmCategory::HarmCategoryDangerousContent,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        };
        let json = serde_json::to_string(&setting).unwrap();
        assert!(json.contains("HARM_CATEGORY_DANGEROUS_CONTENT"));
        assert!(json.contains("BLOCK_MEDIUM_AND_ABOVE"));
    }
}
