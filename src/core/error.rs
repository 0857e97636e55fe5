//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! startup registration and the domain API client.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error from the upstream domain API client.
    #[error("Domain API error: {0}")]
    DomainApi(#[from] crate::domains::tools::definitions::DomainApiError),
}
