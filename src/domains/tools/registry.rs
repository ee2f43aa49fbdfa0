//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Tool metadata for listing
//! - Dispatch of tool calls by name, with protocol error mapping

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, ErrorCode, JsonObject, Tool},
};
use tracing::{error, info, instrument, warn};

use crate::core::config::Config;
use crate::core::error::Result;

use super::ToolHandler;
use super::definitions::GenerateAnimationTool;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create the registry with every tool the server provides.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let animation = GenerateAnimationTool::new(config)?;
        Ok(Self::with_handlers(vec![Arc::new(animation)]))
    }

    /// Create a registry from an explicit list of handlers.
    pub fn with_handlers(handlers: Vec<Arc<dyn ToolHandler>>) -> Self {
        Self { handlers }
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.handlers.iter().map(|h| h.tool()).collect()
    }

    fn find(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.iter().find(|h| h.name() == name)
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Unknown names map to `METHOD_NOT_FOUND`. Any error returned by the
    /// handler maps to `INTERNAL_ERROR` naming the tool.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let Some(handler) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", name),
                None,
            ));
        };

        info!("Executing tool {}", name);
        handler.call(arguments).await.map_err(|e| {
            error!("Error executing tool {}: {}", name, e);
            McpError::internal_error(format!("Tool '{}' execution failed: {}", name, e), None)
        })
    }
}
