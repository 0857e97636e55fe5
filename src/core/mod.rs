//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, startup registration, the server handler
//! and the transport layer.

pub mod config;
pub mod error;
pub mod registration;
pub mod server;
pub mod transport;

pub use config::{Config, ConfigOverrides};
pub use error::{Error, Result};
pub use registration::Collaborators;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
