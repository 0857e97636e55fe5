//! Document retrieval tool definition.
//!
//! One instance is registered per discovered document. It takes no
//! parameters and returns the document's text, or a description of the file
//! when the text cannot be extracted.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::documents::{DocumentRecord, TextExtractor, display_name, document_text};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolHandler, text_result, tool_model};

/// The retrieval tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DocumentToolParams {}

/// Retrieval tool bound to a single document.
pub struct DocumentTool {
    name: String,
    description: String,
    record: Arc<DocumentRecord>,
    extractor: Arc<dyn TextExtractor>,
}

impl DocumentTool {
    /// Create the tool `name` for `record`; `label` prefixes the description.
    pub fn new(
        name: impl Into<String>,
        label: &str,
        record: Arc<DocumentRecord>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        let description = format!(
            "Retrieve {} {} document",
            label,
            display_name(&record.base_name)
        );
        Self {
            name: name.into(),
            description,
            record,
            extractor,
        }
    }
}

#[async_trait]
impl ToolHandler for DocumentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn tool(&self) -> Tool {
        tool_model::<DocumentToolParams>(self.name.clone(), self.description.clone())
    }

    #[instrument(skip_all, fields(tool = %self.name))]
    async fn call(&self, _arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        info!(
            "Executing tool {} for file {}",
            self.name,
            self.record.full_path.display()
        );
        let text = document_text(self.extractor.as_ref(), &self.record).await;
        Ok(text_result(text))
    }
}
