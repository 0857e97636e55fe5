//! Domain price lookup tool definition.

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

/// Parameters for the domain price lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDomainPricesParams {
    /// TLDs to check prices for.
    #[schemars(
        description = "Array of TLD strings to check prices for (e.g., ['co.za', 'com', 'net'])"
    )]
    pub tlds: Vec<String>,
}

/// Domain price lookup tool.
pub struct GetDomainPricesTool {
    api: Arc<DomainApiClient>,
}

impl GetDomainPricesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getDomainPrices";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get pricing information for domain TLDs (Top Level Domains)";

    pub fn new(api: Arc<DomainApiClient>) -> Self {
        Self { api }
    }

    /// Execute the tool logic. Upstream failures become error content.
    #[instrument(skip_all)]
    pub async fn execute(api: &DomainApiClient, params: &GetDomainPricesParams) -> CallToolResult {
        info!(
            "Executing getDomainPrices tool with TLDs: {}",
            params.tlds.join(", ")
        );

        match api.get_domain_prices(&params.tlds).await {
            Ok(data) => json_result(&data),
            Err(e) => {
                error!("Domain prices API error: {}", e);
                error_result(format!("Error fetching domain prices: {}", e))
            }
        }
    }
}

#[async_trait]
impl ToolHandler for GetDomainPricesTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn tool(&self) -> Tool {
        tool_model::<GetDomainPricesParams>(Self::NAME, Self::DESCRIPTION)
    }

    async fn call(&self, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        let params: GetDomainPricesParams = parse_arguments(arguments)?;
        Ok(Self::execute(&self.api, &params).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool_for(server: &MockServer) -> GetDomainPricesTool {
        GetDomainPricesTool::new(Arc::new(DomainApiClient::with_client(
            reqwest::Client::new(),
            &server.uri(),
        )))
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_prices_returns_pretty_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getDomainPrices"))
            .and(query_param("tldsToCheck", "com,net"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "com": 10 })),
            )
            .mount(&server)
            .await;

        let mut args = JsonObject::new();
        args.insert("tlds".to_string(), serde_json::json!(["com", "net"]));

        let result = tool_for(&server).call(args).await.unwrap();
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(text_of(&result), "{\n  \"com\": 10\n}");
    }

    #[tokio::test]
    async fn test_prices_upstream_failure_is_error_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let mut args = JsonObject::new();
        args.insert("tlds".to_string(), serde_json::json!(["com"]));

        let result = tool_for(&server).call(args).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Error fetching domain prices"));
        assert!(text_of(&result).contains("502"));
    }

    #[tokio::test]
    async fn test_prices_requires_tlds() {
        let server = MockServer::start().await;
        let result = tool_for(&server).call(JsonObject::new()).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
