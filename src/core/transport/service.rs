//! Transport service - orchestrates different transport types.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::{Config, McpServer};

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
    port: u16,
}

impl TransportService {
    /// Create a new transport service listening on `port` (network transports only).
    pub fn new(config: TransportConfig, port: u16) -> Self {
        Self { config, port }
    }

    /// Create a transport service from the resolved server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.transport.clone(), config.server.port)
    }

    /// Start the transport with the given MCP server.
    ///
    /// Returns when the transport shuts down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description(self.port));

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg, self.port).run(server).await,
        }
    }
}
