//! Tool handler abstraction.
//!
//! Every tool served by the registry implements [`ToolHandler`]. A handler
//! owns its metadata and turns raw call arguments into a [`CallToolResult`].
//! Operational failures belong inside the result; only contract violations
//! are returned as [`ToolError`].

use rmcp::model::{CallToolResult, JsonObject, Tool};

use super::ToolError;

/// Trait for implementing tool handlers.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Tool metadata (name, description, input schema) advertised to clients.
    fn tool(&self) -> Tool;

    /// Execute the tool with the given arguments.
    async fn call(&self, arguments: Option<JsonObject>) -> Result<CallToolResult, ToolError>;
}
