//! Add tool definition.
//!
//! A tool that adds two numbers.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, parse_arguments, text_result, tool_model};

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First operand.
    pub a: f64,

    /// Second operand.
    pub b: f64,
}

/// Add tool - returns the sum of two numbers as text.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    pub fn execute(params: &AddParams) -> CallToolResult {
        info!("Add tool called");
        text_result((params.a + params.b).to_string())
    }
}

#[async_trait]
impl ToolHandler for AddTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn tool(&self) -> Tool {
        tool_model::<AddParams>(Self::NAME, Self::DESCRIPTION)
    }

    async fn call(&self, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        let params: AddParams = parse_arguments(arguments)?;
        Ok(Self::execute(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_add_integers_prints_without_fraction() {
        let result = AddTool::execute(&AddParams { a: 2.0, b: 3.0 });
        assert_eq!(text_of(&result), "5");
    }

    #[test]
    fn test_add_fractions() {
        let result = AddTool::execute(&AddParams { a: 1.5, b: -0.25 });
        assert_eq!(text_of(&result), "1.25");
    }

    #[tokio::test]
    async fn test_add_rejects_missing_operand() {
        let mut args = JsonObject::new();
        args.insert("a".to_string(), serde_json::json!(1));
        let result = AddTool.call(args).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
