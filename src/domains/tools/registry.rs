//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is filled once while the server is constructed and never
//! changes afterwards. Names are unique: [`ToolRegistry::unique_name`] picks a
//! free name for documents whose identifiers collide.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use rmcp::model::{CallToolResult, JsonObject, Tool};

use super::error::ToolError;
use super::handlers::ToolHandler;

/// Tool registry - manages all available tools in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tool named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Return `base` if it is free, otherwise `base_2`, `base_3`, ... (first free).
    pub fn unique_name(&self, base: &str) -> String {
        if !self.contains(base) {
            return base.to_string();
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{}_{}", base, suffix);
            if !self.contains(&candidate) {
                warn!("Tool name '{}' already taken, using '{}'", base, candidate);
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Register a tool. Fails if the name is already taken.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> Result<(), ToolError> {
        let name = handler.name().to_string();
        if self.contains(&name) {
            return Err(ToolError::Duplicate(name));
        }

        info!("Registering tool: {}", name);
        self.index.insert(name, self.handlers.len());
        self.handlers.push(handler);
        Ok(())
    }

    /// Get all tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.handlers.iter().map(|h| h.tool()).collect()
    }

    /// Iterate over the registered handlers.
    pub fn handlers(&self) -> impl Iterator<Item = &Arc<dyn ToolHandler>> {
        self.handlers.iter()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no tool is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch a tool call by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let Some(&position) = self.index.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        self.handlers[position].call(arguments).await
    }
}
