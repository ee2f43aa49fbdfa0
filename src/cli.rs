//! Command line interface.

use clap::Parser;

/// Allyson MCP Server - Animation Generator
///
/// Serves the `generate_svg_animation` tool over stdio. The tool uploads a
/// local source file together with a prompt and writes the generated
/// animation to a local output path.
#[derive(Parser, Debug)]
#[command(name = "allyson-mcp-server")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Environment Variables:\n  \
    API_KEY            Your Allyson API key\n  \
    MCP_ENV            'development' targets http://localhost:3001/api (NODE_ENV is also read)\n  \
    MCP_API_BASE_URL   Explicit animation API base URL\n  \
    MCP_LOG_LEVEL      Log level (default: info)\n\n\
    Examples:\n  \
    allyson-mcp-server --api-key your-api-key-here\n  \
    API_KEY=your-key allyson-mcp-server")]
pub struct Cli {
    /// Your Allyson API key
    #[arg(long, value_name = "KEY", env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}
