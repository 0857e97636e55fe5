//! AUX MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing the PDF documents of one
//! directory as tools and resources, together with domain registration
//! lookups and a fixed set of prompt templates.
//!
//! # Architecture
//!
//! - **core**: configuration, startup registration, error handling, the
//!   server handler and the transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **documents**: discovery, naming and text extraction
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: one readable resource per document
//!   - **prompts**: Prompt templates
//! - **cli**: command line flags
//!
//! # Example
//!
//! ```rust,no_run
//! use aux_mcp_server::core::{Config, ConfigOverrides, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load(ConfigOverrides::default());
//!     let transport = TransportService::from_config(&config);
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
