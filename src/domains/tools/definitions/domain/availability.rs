//! Domain availability check tool definition.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::client::DomainApiClient;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{
    ToolHandler, error_result, json_result, parse_arguments, tool_model,
};

/// Parameters for the availability check.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CheckDomainAvailabilityParams {
    /// Fully qualified domain name.
    #[schemars(
        description = "The full domain name to check availability for (e.g., 'example.co.za')"
    )]
    pub domain: String,
}

/// Domain availability check tool.
pub struct CheckDomainAvailabilityTool {
    api: Arc<DomainApiClient>,
}

impl CheckDomainAvailabilityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "checkDomainAvailability";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check if a domain name is available for registration";

    pub fn new(api: Arc<DomainApiClient>) -> Self {
        Self { api }
    }

    /// Execute the tool logic. Upstream failures become error content.
    #[instrument(skip_all, fields(domain = %params.domain))]
    pub async fn execute(
        api: &DomainApiClient,
        params: &CheckDomainAvailabilityParams,
    ) -> CallToolResult {
        info!(
            "Executing checkDomainAvailability tool for domain: {}",
            params.domain
        );

        match api.check_domain_availability(&params.domain).await {
            Ok(data) => json_result(&data),
            Err(e) => {
                error!("Domain availability API error: {}", e);
                error_result(format!("Error checking domain availability: {}", e))
            }
        }
    }
}

#[async_trait]
impl ToolHandler for CheckDomainAvailabilityTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn tool(&self) -> Tool {
        tool_model::<CheckDomainAvailabilityParams>(Self::NAME, Self::DESCRIPTION)
    }

    async fn call(&self, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        let params: CheckDomainAvailabilityParams = parse_arguments(arguments)?;
        Ok(Self::execute(&self.api, &params).await)
    }
}
