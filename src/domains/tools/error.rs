//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool registration or dispatch.
///
/// Failures inside a tool (an upstream outage, a broken document) are not
/// errors at this level: they are reported as error content in the result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    Duplicate(String),

    /// The derived tool name is not usable.
    #[error("Invalid tool name for {0}: identifier is empty")]
    EmptyIdentifier(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Convert into the protocol-level error returned to the client.
    pub fn into_mcp(self) -> McpError {
        McpError::invalid_params(self.to_string(), None)
    }
}
