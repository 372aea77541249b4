//! The Model Handle: an opaque capability bound to one named remote
//! generative model.
//!
//! A [`GenerativeModel`] is created by the client against the publisher
//! models endpoint, carries the metadata the service returned, and exposes
//! the generation call the story tab consumes. Handles are never mutated;
//! the shell creates exactly one per process through the cached accessor.

use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::config::DeploymentConfig;
use crate::error::{
    ContentError, NetworkError, RequestError, ResponseError, SafetyRatingInfo, VertexError,
    VertexResult,
};
use crate::observability::Logger;
use crate::transport::{endpoints, HttpMethod, HttpTransport, RequestBuilder, ResponseParser, TransportError};
use crate::types::{
    BlockReason, FinishReason, GenerateContentRequest, GenerateContentResponse, PublisherModel,
    SafetyRating,
};

/// A bound connection to one named remote generative model.
pub struct GenerativeModel {
    model_id: String,
    info: PublisherModel,
    config: Arc<DeploymentConfig>,
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
    logger: Arc<dyn Logger>,
}

impl GenerativeModel {
    pub(crate) fn new(
        model_id: String,
        info: PublisherModel,
        config: Arc<DeploymentConfig>,
        transport: Arc<dyn HttpTransport>,
        request_builder: RequestBuilder,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            model_id,
            info,
            config,
            transport,
            request_builder,
            logger,
        }
    }

    /// The model id this handle is bound to (e.g. `"gemini-pro"`).
    pub fn name(&self) -> &str {
        &self.model_id
    }

    /// The publisher-model metadata fetched when the handle was created.
    pub fn info(&self) -> &PublisherModel {
        &self.info
    }

    /// Generate content from the bound model.
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> VertexResult<GenerateContentResponse> {
        if request.contents.is_empty() {
            return Err(VertexError::Request(RequestError::EmptyRequest {
                message: "contents must not be empty".to_string(),
            }));
        }

        let request_id = Uuid::new_v4();
        let start = Instant::now();

        self.logger.debug(
            "Starting content generation",
            json!({
                "request_id": request_id.to_string(),
                "model": self.model_id,
                "contents_count": request.contents.len(),
                "has_generation_config": request.generation_config.is_some(),
            }),
        );

        let path = endpoints::generate_content(
            &self.config.project_id,
            &self.config.region,
            &self.model_id,
        );

        let http_request =
            self.request_builder
                .build_request(HttpMethod::Post, &path, Some(&request), None)?;

        let http_response = self.transport.send(http_request).await.map_err(|e| {
            let error = match e {
                TransportError::Timeout => VertexError::Network(NetworkError::Timeout {
                    duration: self.config.timeout,
                }),
                other => VertexError::Network(NetworkError::ConnectionFailed {
                    message: other.to_string(),
                }),
            };

            self.logger.error(
                "Network error during content generation",
                json!({
                    "request_id": request_id.to_string(),
                    "model": self.model_id,
                    "error": error.to_string(),
                }),
            );

            error
        })?;

        let response: GenerateContentResponse = ResponseParser::parse_response(http_response)?;

        if let Err(e) = self.check_safety_blocks(&response) {
            self.logger.warn(
                "Content generation blocked",
                json!({
                    "request_id": request_id.to_string(),
                    "model": self.model_id,
                    "error": e.to_string(),
                    "duration_ms": start.elapsed().as_millis(),
                }),
            );
            return Err(e);
        }

        if let Some(usage) = &response.usage_metadata {
            tracing::info!(
                prompt_tokens = usage.prompt_token_count,
                completion_tokens = usage.candidates_token_count.unwrap_or(0),
                total_tokens = usage.total_token_count,
                "Content generation usage"
            );
        }

        self.logger.info(
            "Content generation completed",
            json!({
                "request_id": request_id.to_string(),
                "model": self.model_id,
                "duration_ms": start.elapsed().as_millis(),
                "candidates": response.candidates.as_ref().map(Vec::len).unwrap_or(0),
            }),
        );

        Ok(response)
    }

    /// Generate from a single text prompt and return the first candidate's
    /// text — the shape the story tab consumes.
    pub async fn generate_text(&self, prompt: &str) -> VertexResult<String> {
        let response = self
            .generate_content(GenerateContentRequest::from_prompt(prompt))
            .await?;

        response
            .text()
            .ok_or(VertexError::Response(ResponseError::EmptyCandidates))
    }

    /// Surface safety blocks in the response as typed content errors.
    fn check_safety_blocks(&self, response: &GenerateContentResponse) -> VertexResult<()> {
        if let Some(feedback) = &response.prompt_feedback {
            if let Some(block_reason) = &feedback.block_reason {
                return match block_reason {
                    BlockReason::Safety => Err(VertexError::Content(ContentError::SafetyBlocked {
                        reason: primary_reason(feedback.safety_ratings.as_deref()),
                        safety_ratings: rating_info(feedback.safety_ratings.as_deref()),
                    })),
                    BlockReason::Blocklist | BlockReason::ProhibitedContent => {
                        Err(VertexError::Content(ContentError::ProhibitedContent))
                    }
                    _ => Ok(()),
                };
            }
        }

        if let Some(candidates) = &response.candidates {
            for candidate in candidates {
                match candidate.finish_reason {
                    Some(FinishReason::Safety) => {
                        return Err(VertexError::Content(ContentError::SafetyBlocked {
                            reason: primary_reason(candidate.safety_ratings.as_deref()),
                            safety_ratings: rating_info(candidate.safety_ratings.as_deref()),
                        }));
                    }
                    Some(FinishReason::Recitation) => {
                        return Err(VertexError::Content(ContentError::RecitationBlocked {
                            safety_ratings: rating_info(candidate.safety_ratings.as_deref()),
                        }));
                    }
                    Some(FinishReason::Blocklist) | Some(FinishReason::ProhibitedContent) => {
                        return Err(VertexError::Content(ContentError::ProhibitedContent));
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}

fn rating_info(ratings: Option<&[SafetyRating]>) -> Vec<SafetyRatingInfo> {
    ratings
        .unwrap_or_default()
        .iter()
        .map(|r| SafetyRatingInfo {
            category: format!("{:?}", r.category),
            probability: format!("{:?}", r.probability),
        })
        .collect()
}

fn primary_reason(ratings: Option<&[SafetyRating]>) -> String {
    ratings
        .and_then(|ratings| ratings.first())
        .map(|r| format!("Safety: {:?} ({:?})", r.category, r.probability))
        .unwrap_or_else(|| "Safety (unspecified)".to_string())
}

impl std::fmt::Debug for GenerativeModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerativeModel")
            .field("model_id", &self.model_id)
            .field("version_id", &self.info.version_id)
            .finish()
    }
}
