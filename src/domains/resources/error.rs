//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A resource with the same URI is already registered.
    #[error("Resource already registered: {0}")]
    Duplicate(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Convert into the protocol-level error returned to the client.
    pub fn into_mcp(self) -> McpError {
        match self {
            Self::NotFound(_) => McpError::resource_not_found(self.to_string(), None),
            Self::Duplicate(_) => McpError::internal_error(self.to_string(), None),
        }
    }
}
