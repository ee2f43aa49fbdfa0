//! Allyson MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing one tool,
//! `generate_svg_animation`, which uploads a local source file and a prompt
//! to the Allyson animation API and saves the generated animation locally.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP handler and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool registry, dispatch and the animation tool
//! - **cli**: Command line arguments
//!
//! # Example
//!
//! ```rust,no_run
//! use allyson_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env(std::env::var("API_KEY").ok())?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
