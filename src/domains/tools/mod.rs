//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call. The fixed utility
//! tools live in `definitions/`; one retrieval tool per discovered document is
//! created at startup from [`definitions::DocumentTool`].
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations (one file per tool)
//! - `handlers.rs` - The [`ToolHandler`] trait and result helpers
//! - `registry.rs` - Ordered tool registry with collision-free naming
//! - `router.rs` - rmcp `ToolRouter` built from the registry
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
