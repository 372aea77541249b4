//! Story tab demo for the Vertex AI Gemini shell.
//!
//! This is the demo wiring of the rendering entry point: bootstrap the
//! shell from the environment, fetch the cached Model Handle, and render
//! a single story tab to stdout.
//!
//! # Usage
//!
//! ```bash
//! export PROJECT_ID="your-project"
//! export REGION="us-central1"
//! export GOOGLE_ACCESS_TOKEN="$(gcloud auth print-access-token)"
//! cargo run --example story_tab
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use vertex_story::{App, DeploymentConfig, GenerationConfig, GenerativeModel, TabRenderer};
use vertex_story::types::GenerateContentRequest;
use vertex_story::VertexResult;

/// Renders the story tab: one prompt, one generated story.
struct StoryTab {
    premise: String,
}

#[async_trait]
impl TabRenderer for StoryTab {
    async fn render(&self, model: Arc<GenerativeModel>) -> VertexResult<()> {
        println!("=== Story tab ({}) ===\n", model.name());

        let mut request = GenerateContentRequest::from_prompt(format!(
            "Write a short story based on the following premise: {}",
            self.premise
        ));
        request.generation_config = Some(GenerationConfig {
            temperature: Some(0.8),
            max_output_tokens: Some(1024),
            ..GenerationConfig::default()
        });

        let response = model.generate_content(request).await?;

        if let Some(story) = response.text() {
            println!("{story}");
        }

        if let Some(usage) = &response.usage_metadata {
            println!("\n---");
            println!("Prompt tokens:     {}", usage.prompt_token_count);
            println!("Completion tokens: {}", usage.candidates_token_count.unwrap_or(0));
            println!("Total tokens:      {}", usage.total_token_count);
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DeploymentConfig::from_env()?;
    let app = App::bootstrap(config).await?;

    let tab = StoryTab {
        premise: "a lighthouse keeper who discovers the fog can speak".to_string(),
    };

    app.render_tab(&tab).await?;

    Ok(())
}
