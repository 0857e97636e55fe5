//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! Everything the server exposes is registered once in [`McpServer::new`]
//! (see `core::registration`). The ToolRouter used by rmcp and the HTTP
//! transport dispatch through the same [`ToolRegistry`].

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as StartupResult;
use super::registration::{Collaborators, Registration, register_all};
use crate::domains::{
    prompts::PromptService,
    resources::ResourceService,
    tools::{ToolRegistry, build_tool_router},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools, shared with the tool router.
    tool_registry: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,

    /// Number of documents discovered at startup.
    document_count: usize,
}

impl McpServer {
    /// Create a new MCP server with the production collaborators.
    pub fn new(config: Config) -> StartupResult<Self> {
        let collaborators = Collaborators::from_config(&config)?;
        Ok(Self::with_collaborators(config, collaborators))
    }

    /// Create a new MCP server from explicit collaborators.
    ///
    /// Scans the document directory once and registers everything the
    /// server exposes.
    pub fn with_collaborators(config: Config, collaborators: Collaborators) -> Self {
        info!("PDF Directory: {}", config.documents.directory.display());

        let documents = collaborators.source.scan(&config.documents.directory);
        let document_count = documents.len();
        info!("Found {} PDF documents", document_count);

        let Registration {
            tools,
            resources,
            prompts,
        } = register_all(&config, documents, &collaborators);

        Self {
            tool_router: build_tool_router::<Self>(&tools),
            tool_registry: Arc::new(tools),
            resource_service: Arc::new(resources),
            prompt_service: Arc::new(prompts),
            config: Arc::new(config),
            document_count,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Number of documents discovered at startup.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Names of all registered tools, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tool_registry.tool_names()
    }

    /// Instructions sent to clients on initialization.
    pub fn instructions(&self) -> String {
        format!(
            "{} serves {} document(s). Call the get_{}_* tools or read the file:// resources \
             to retrieve their text. getDomainPrices and checkDomainAvailability query the \
             domain registration API.",
            self.name(),
            self.document_count,
            self.config.documents.namespace
        )
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools_json(&self) -> Vec<serde_json::Value> {
        self.tool_registry
            .tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool_json(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<serde_json::Value, String> {
        let result = self
            .tool_registry
            .call_tool(name, arguments)
            .await
            .map_err(|e| e.to_string())?;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }

    /// List all available resources (for HTTP transport).
    pub fn list_resources_json(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource_json(
        &self,
        uri: &str,
    ) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }

    /// List all available prompts (for HTTP transport).
    pub fn list_prompts_json(&self) -> Vec<serde_json::Value> {
        self.prompt_service
            .list_prompts()
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub fn get_prompt_json(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<serde_json::Value, String> {
        match self
            .prompt_service
            .get_prompt(name, arguments.map(string_arguments))
        {
            Ok(result) => Ok(serde_json::json!({
                "description": result.description,
                "messages": result.messages
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Keep the string-valued prompt arguments.
fn string_arguments(map: JsonObject) -> HashMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
        .collect()
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                title: None,
                version: self.version().to_string(),
                icons: None,
                website_url: None,
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| e.into_mcp())
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: self.prompt_service.list_prompts(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name, request.arguments.map(string_arguments))
            .map_err(|e| e.into_mcp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DomainApiConfig;
    use crate::domains::documents::{
        DocumentRecord, DocumentSource, ExtractionError, FsDocumentSource, TextExtractor,
    };
    use crate::domains::tools::definitions::DomainApiClient;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};

    struct StaticText;

    #[async_trait]
    impl TextExtractor for StaticText {
        fn name(&self) -> &str {
            "static"
        }

        async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
            Ok(format!("contents of {}", path.display()))
        }
    }

    struct TwoDocuments;

    impl DocumentSource for TwoDocuments {
        fn scan(&self, directory: &Path) -> Vec<DocumentRecord> {
            ["Price List", "Company Profile"]
                .into_iter()
                .map(|base| DocumentRecord {
                    filename: format!("{}.pdf", base),
                    full_path: directory.join(format!("{}.pdf", base)),
                    base_name: base.to_string(),
                })
                .collect()
        }
    }

    fn server() -> McpServer {
        let mut config = Config::default();
        config.server.name = "Test Server".to_string();
        config.server.version = "2.1.0".to_string();
        config.documents.directory = PathBuf::from("/srv/pdfs");

        let collaborators = Collaborators {
            source: Arc::new(TwoDocuments),
            extractor: Arc::new(StaticText),
            domain_api: unreachable_domain_api(),
        };
        McpServer::with_collaborators(config, collaborators)
    }

    fn unreachable_domain_api() -> Arc<DomainApiClient> {
        Arc::new(
            DomainApiClient::new(&DomainApiConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                timeout_secs: 1,
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_get_info_reports_identity() {
        let server = server();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "Test Server");
        assert_eq!(info.server_info.version, "2.1.0");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.instructions.unwrap().contains("serves 2 document(s)"));
    }

    #[test]
    fn test_new_with_production_collaborators() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.documents.directory = dir.path().to_path_buf();

        let server = McpServer::new(config).unwrap();
        assert_eq!(server.document_count(), 0);
        assert_eq!(server.tool_router.list_all().len(), 3);
    }

    #[test]
    fn test_colliding_files_on_disk_get_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a-b.pdf", "a_b.pdf", "Report (Final).PDF", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"%PDF-1.4").unwrap();
        }

        let mut config = Config::default();
        config.documents.directory = dir.path().to_path_buf();
        config.documents.namespace = "x".to_string();

        let collaborators = Collaborators {
            source: Arc::new(FsDocumentSource::new("pdf")),
            extractor: Arc::new(StaticText),
            domain_api: unreachable_domain_api(),
        };
        let server = McpServer::with_collaborators(config, collaborators);

        let mut names = server.tool_names();
        names.sort();
        assert_eq!(
            names,
            vec![
                "add",
                "checkDomainAvailability",
                "getDomainPrices",
                "get_x_a_b",
                "get_x_a_b_2",
                "get_x_report_final",
            ]
        );
        assert_eq!(server.document_count(), 3);
        assert_eq!(server.list_resources_json().len(), 3);
    }

    #[test]
    fn test_router_and_registry_agree() {
        let server = server();
        let routed = server.tool_router.list_all();
        assert_eq!(routed.len(), server.tool_names().len());
        assert_eq!(server.tool_names().len(), 5);
        assert!(server.tool_names().contains(&"get_aux_price_list"));
        assert!(server.tool_names().contains(&"get_aux_company_profile"));
    }

    #[tokio::test]
    async fn test_call_tool_json() {
        let server = server();

        let mut args = JsonObject::new();
        args.insert("a".to_string(), serde_json::json!(2));
        args.insert("b".to_string(), serde_json::json!(3.5));

        let result = server.call_tool_json("add", args).await.unwrap();
        assert_eq!(result["content"][0]["text"], "5.5");
    }

    #[tokio::test]
    async fn test_call_unknown_tool_json() {
        let server = server();
        let result = server.call_tool_json("missing", JsonObject::new()).await;
        assert!(result.unwrap_err().contains("Tool not found"));
    }

    #[tokio::test]
    async fn test_read_resource_json() {
        let server = server();
        let resources = server.list_resources_json();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0]["name"], "AUX - Price List");

        let uri = resources[0]["uri"].as_str().unwrap().to_string();
        let result = server.read_resource_json(&uri).await.unwrap();
        assert_eq!(
            result["contents"][0]["text"],
            "contents of /srv/pdfs/Price List.pdf"
        );
    }

    #[test]
    fn test_get_prompt_json() {
        let server = server();
        assert_eq!(server.list_prompts_json().len(), 7);

        let mut args = JsonObject::new();
        args.insert("designSystem".to_string(), serde_json::json!("cloudscape"));
        let result = server.get_prompt_json("find-components", Some(args)).unwrap();
        assert_eq!(
            result["description"],
            "Find design system components and write to a file"
        );

        let missing = server.get_prompt_json("find-components", None);
        assert!(missing.unwrap_err().contains("designSystem"));
    }
}
