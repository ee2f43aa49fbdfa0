//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP. Ctrl-C cancels the running
//! service, which closes the transport and lets the process exit cleanly.

use rmcp::ServiceExt;
use tracing::{info, warn};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects or SIGINT arrives.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("{} running on stdio", server.name());

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let cancel = service.cancellation_token();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Interrupt received, closing transport");
                    cancel.cancel();
                }
                Err(e) => warn!("Failed to listen for interrupt signal: {}", e),
            }
        });

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished: {:?}", reason);
        Ok(())
    }
}
