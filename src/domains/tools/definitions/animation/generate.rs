//! `generate_svg_animation` tool definition.
//!
//! Uploads a local source file with a prompt to the animation API and writes
//! the generated animation to a local output path. Every operational outcome,
//! including failures, is reported as a [`ResultEnvelope`]; only missing
//! arguments are returned as errors.

use std::path::Path;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use tracing::{error, info, instrument, warn};

use crate::core::config::Config;
use crate::domains::tools::{ToolError, ToolHandler};

use super::client::AnimationClient;
use super::envelope::ResultEnvelope;
use super::error::AnimationError;
use super::source_file_name;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the animation generation tool.
#[derive(Debug, Clone, JsonSchema)]
pub struct GenerateAnimationParams {
    #[schemars(
        description = "Description of what animation to generate (e.g., 'Make the character wave their hand', 'Add bouncing motion to the ball')"
    )]
    pub prompt: String,

    #[schemars(
        description = "Local file path to the source file to animate, must be the absolute path (e.g., '/Users/username/image.svg')"
    )]
    pub svg_path: String,

    #[schemars(
        description = "Local file path to the output file, must be the absolute path (e.g., '/path/to/animated-svg.tsx')"
    )]
    pub output_path: String,
}

impl GenerateAnimationParams {
    /// Extract and validate the call arguments.
    ///
    /// Each field must be a non-empty string. Fields are checked in order so
    /// the first missing one is reported.
    pub fn from_arguments(arguments: Option<&JsonObject>) -> Result<Self, ToolError> {
        let field = |key: &str, label: &str| -> Result<String, ToolError> {
            arguments
                .and_then(|args| args.get(key))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| ToolError::invalid_arguments(format!("{} is required", label)))
        };

        Ok(Self {
            prompt: field("prompt", "Prompt")?,
            svg_path: field("svg_path", "SVG file path")?,
            output_path: field("output_path", "Output file path")?,
        })
    }
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// Animation generation tool.
#[derive(Debug, Clone)]
pub struct GenerateAnimationTool {
    client: AnimationClient,
}

impl GenerateAnimationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_svg_animation";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate an SVG animation from a source file and prompt";

    pub fn new(config: Arc<Config>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: AnimationClient::new(&config.api)?,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GenerateAnimationParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run one call: validate, then produce exactly one envelope.
    #[instrument(skip_all)]
    pub async fn execute(&self, arguments: Option<&JsonObject>) -> Result<ResultEnvelope, ToolError> {
        let params = GenerateAnimationParams::from_arguments(arguments)?;

        match self.generate(&params).await {
            Ok(envelope) => Ok(envelope),
            Err(e) => {
                error!("Request failed: {}", e);
                Ok(ResultEnvelope::from_failure(
                    &e,
                    &params.prompt,
                    &params.svg_path,
                    &params.output_path,
                    self.client.endpoint(),
                ))
            }
        }
    }

    async fn generate(&self, params: &GenerateAnimationParams) -> Result<ResultEnvelope, AnimationError> {
        info!("Reading file from: {}", params.svg_path);
        let content = tokio::fs::read(&params.svg_path)
            .await
            .map_err(|source| AnimationError::ReadSource {
                path: params.svg_path.clone().into(),
                source,
            })?;
        let file_name = source_file_name(&params.svg_path).unwrap_or_else(|| "file".to_string());

        info!("Uploading {} with prompt: \"{}\"", file_name, params.prompt);
        let response = self.client.upload(content, file_name, &params.prompt).await?;

        let mut envelope = ResultEnvelope::from_response(&response, &params.output_path);
        if !response.is_success() {
            warn!("API error {}: {}", response.status, response.body_text());
            return Ok(envelope);
        }

        info!("Animation generated for \"{}\"", params.prompt);
        if let Err(e) = tokio::fs::write(Path::new(&params.output_path), &response.body).await {
            error!("Failed to write output file {}: {}", params.output_path, e);
            envelope.mark_write_failed(&e);
        } else {
            info!("Wrote {} bytes to {}", response.body.len(), params.output_path);
        }

        Ok(envelope)
    }
}

#[async_trait::async_trait]
impl ToolHandler for GenerateAnimationTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn tool(&self) -> Tool {
        Self::to_tool()
    }

    async fn call(&self, arguments: Option<JsonObject>) -> Result<CallToolResult, ToolError> {
        let envelope = self.execute(arguments.as_ref()).await?;
        Ok(CallToolResult::success(vec![Content::text(
            envelope.to_pretty_json()?,
        )]))
    }
}

// ============================================================================
// Tests
// ============================================================================
