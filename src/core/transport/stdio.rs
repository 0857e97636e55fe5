//! STDIO transport: the MCP session runs over the process's stdin/stdout.
//!
//! Nothing else may write to stdout while it runs; logs go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client closes the session.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let label = format!("{} v{}", server.name(), server.version());

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::session(e.to_string()))?;
        info!("{} ready on stdio", label);

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::SessionEnded(e.to_string()))?;
        info!("STDIO session closed: {:?}", reason);

        Ok(())
    }
}
