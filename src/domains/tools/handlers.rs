//! Tool handler trait and shared result helpers.
//!
//! Every tool, static or discovered at startup, is a [`ToolHandler`] trait
//! object. The registry stores them and both the rmcp router and the HTTP
//! transport dispatch through the same objects.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::ToolError;

/// A tool that can be registered and called.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// The name the tool is registered under.
    fn name(&self) -> &str;

    /// Tool metadata (name, description, input schema).
    fn tool(&self) -> Tool;

    /// Execute the tool with the given JSON arguments.
    async fn call(&self, arguments: JsonObject) -> Result<CallToolResult, ToolError>;
}

/// Build the Tool model for a handler whose parameters are `P`.
pub fn tool_model<P>(name: impl Into<String>, description: impl Into<String>) -> Tool
where
    P: JsonSchema + 'static,
{
    let name: String = name.into();
    let description: String = description.into();

    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize tool arguments into the handler's parameter type.
pub fn parse_arguments<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Create a success result with text content.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create an error result with a formatted message.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result holding pretty-printed JSON.
pub fn json_result(value: &serde_json::Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => text_result(text),
        Err(e) => error_result(format!("Failed to serialize response: {}", e)),
    }
}
