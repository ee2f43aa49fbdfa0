//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Central tool registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new module in `definitions/`
//! 2. Implement `ToolHandler` for it
//! 3. Register it in `ToolRegistry::new`

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::ToolError;
pub use handlers::ToolHandler;
pub use registry::ToolRegistry;
