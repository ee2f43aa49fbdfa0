//! MCP Server Entry Point
//!
//! Parses the command line, loads configuration, initializes logging and
//! serves the animation tool over stdio.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use allyson_mcp_server::cli::Cli;
use allyson_mcp_server::core::{Config, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::from_env(cli.api_key) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'allyson-mcp-server --help' for usage information.");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    log_endpoint(&config);

    let server = McpServer::new(config)?;

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Report which animation API endpoint calls will go to.
fn log_endpoint(config: &Config) {
    if config.api.is_overridden() {
        warn!("Animation API base URL overridden: {}", config.api.base_url);
    }
    info!(
        "Animation API endpoint: {} ({:?})",
        config.api.endpoint(),
        config.api.environment
    );
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP message stream.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
