//! Startup registration of tools, resources and prompts.
//!
//! Runs once while the server is constructed. The fixed utility tools are
//! registered first, then one resource and one retrieval tool per document in
//! discovery order. A document that cannot be registered is logged and skipped
//! without affecting the others.

use std::sync::Arc;
use tracing::{error, info};

use super::config::Config;
use super::error::Result;
use crate::domains::documents::{
    DocumentRecord, DocumentSource, FsDocumentSource, TextExtractor, extractor_for,
    tool_identifier,
};
use crate::domains::prompts::PromptService;
use crate::domains::resources::ResourceService;
use crate::domains::tools::definitions::{
    AddTool, CheckDomainAvailabilityTool, DocumentTool, DomainApiClient, GetDomainPricesTool,
};
use crate::domains::tools::{ToolError, ToolHandler, ToolRegistry};

/// External collaborators the server is built from.
#[derive(Clone)]
pub struct Collaborators {
    /// Lists the documents to expose.
    pub source: Arc<dyn DocumentSource>,

    /// Turns a document into text.
    pub extractor: Arc<dyn TextExtractor>,

    /// Client for the domain pricing/availability API.
    pub domain_api: Arc<DomainApiClient>,
}

impl Collaborators {
    /// The production collaborators for `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            source: Arc::new(FsDocumentSource::new(config.documents.extension.clone())),
            extractor: extractor_for(config.documents.extractor),
            domain_api: Arc::new(DomainApiClient::new(&config.domain_api)?),
        })
    }
}

/// Everything registered at startup.
pub struct Registration {
    pub tools: ToolRegistry,
    pub resources: ResourceService,
    pub prompts: PromptService,
}

/// Label used in resource names and tool descriptions, e.g. `AUX`.
pub fn namespace_label(namespace: &str) -> String {
    namespace.to_uppercase()
}

/// Base tool name for a document: `get_<namespace>_<identifier>`.
pub fn document_tool_name(
    namespace: &str,
    base_name: &str,
) -> std::result::Result<String, ToolError> {
    let identifier = tool_identifier(base_name);
    if identifier.is_empty() {
        return Err(ToolError::EmptyIdentifier(base_name.to_string()));
    }
    Ok(format!("get_{}_{}", namespace, identifier))
}

/// Register the fixed tools and prompts plus one resource and tool per document.
pub fn register_all(
    config: &Config,
    documents: Vec<DocumentRecord>,
    collaborators: &Collaborators,
) -> Registration {
    let mut tools = ToolRegistry::new();
    let mut resources = ResourceService::new(collaborators.extractor.clone());
    let prompts = PromptService::new();

    register_builtin_tools(&mut tools, collaborators);

    let namespace = &config.documents.namespace;
    let label = namespace_label(namespace);

    for record in documents {
        let record = Arc::new(record);
        if let Err(e) = register_document(
            &mut tools,
            &mut resources,
            namespace,
            &label,
            record.clone(),
            collaborators,
        ) {
            error!("Skipping document {}: {}", record.filename, e);
        }
    }

    info!(
        "Registered {} tool(s), {} resource(s), {} prompt(s)",
        tools.len(),
        resources.len(),
        prompts.len()
    );

    Registration {
        tools,
        resources,
        prompts,
    }
}

fn register_builtin_tools(tools: &mut ToolRegistry, collaborators: &Collaborators) {
    let builtin: [Arc<dyn ToolHandler>; 3] = [
        Arc::new(GetDomainPricesTool::new(collaborators.domain_api.clone())),
        Arc::new(CheckDomainAvailabilityTool::new(
            collaborators.domain_api.clone(),
        )),
        Arc::new(AddTool),
    ];

    for handler in builtin {
        if let Err(e) = tools.register(handler) {
            error!("Failed to register built-in tool: {}", e);
        }
    }
}

fn register_document(
    tools: &mut ToolRegistry,
    resources: &mut ResourceService,
    namespace: &str,
    label: &str,
    record: Arc<DocumentRecord>,
    collaborators: &Collaborators,
) -> Result<()> {
    let base = document_tool_name(namespace, &record.base_name)?;
    let name = tools.unique_name(&base);

    resources.register_document(record.clone(), label)?;

    tools.register(Arc::new(DocumentTool::new(
        name,
        label,
        record,
        collaborators.extractor.clone(),
    )))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DomainApiConfig;
    use crate::domains::documents::ExtractionError;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};

    struct NoText;

    #[async_trait]
    impl TextExtractor for NoText {
        fn name(&self) -> &str {
            "none"
        }

        async fn extract(&self, _path: &Path) -> std::result::Result<String, ExtractionError> {
            Ok(String::new())
        }
    }

    struct FixedSource(Vec<DocumentRecord>);

    impl DocumentSource for FixedSource {
        fn scan(&self, _directory: &Path) -> Vec<DocumentRecord> {
            self.0.clone()
        }
    }

    fn record(filename: &str) -> DocumentRecord {
        let base_name = filename.trim_end_matches(".pdf").to_string();
        DocumentRecord {
            filename: filename.to_string(),
            full_path: PathBuf::from("/docs").join(filename),
            base_name,
        }
    }

    fn collaborators(documents: Vec<DocumentRecord>) -> Collaborators {
        Collaborators {
            source: Arc::new(FixedSource(documents)),
            extractor: Arc::new(NoText),
            domain_api: Arc::new(
                DomainApiClient::new(&DomainApiConfig {
                    base_url: "http://127.0.0.1:9".to_string(),
                    timeout_secs: 1,
                })
                .unwrap(),
            ),
        }
    }

    fn config_with_namespace(namespace: &str) -> Config {
        let mut config = Config::default();
        config.documents.namespace = namespace.to_string();
        config
    }

    fn register(namespace: &str, documents: Vec<DocumentRecord>) -> Registration {
        let config = config_with_namespace(namespace);
        let collaborators = collaborators(documents);
        let documents = collaborators.source.scan(&config.documents.directory);
        register_all(&config, documents, &collaborators)
    }

    #[test]
    fn test_document_tool_name() {
        assert_eq!(
            document_tool_name("aux", "Report (Final)").unwrap(),
            "get_aux_report_final"
        );
        assert!(matches!(
            document_tool_name("aux", "!!!"),
            Err(ToolError::EmptyIdentifier(_))
        ));
    }

    #[test]
    fn test_builtin_tools_always_registered() {
        let registration = register("aux", vec![]);
        assert_eq!(
            registration.tools.tool_names(),
            vec!["getDomainPrices", "checkDomainAvailability", "add"]
        );
        assert!(registration.resources.is_empty());
        assert_eq!(registration.prompts.len(), 7);
    }

    #[test]
    fn test_colliding_identifiers_get_suffix() {
        let registration = register("x", vec![record("a-b.pdf"), record("a_b.pdf")]);

        let names = registration.tools.tool_names();
        assert_eq!(&names[3..], &["get_x_a_b", "get_x_a_b_2"]);
        assert_eq!(registration.resources.len(), 2);
    }

    #[test]
    fn test_third_collision_gets_next_suffix() {
        let registration = register(
            "x",
            vec![record("a-b.pdf"), record("a_b.pdf"), record("A B.pdf")],
        );
        assert_eq!(
            &registration.tools.tool_names()[3..],
            &["get_x_a_b", "get_x_a_b_2", "get_x_a_b_3"]
        );
    }

    #[test]
    fn test_empty_identifier_is_skipped_in_isolation() {
        let registration = register("aux", vec![record("!!!.pdf"), record("price_list.pdf")]);

        assert_eq!(&registration.tools.tool_names()[3..], &["get_aux_price_list"]);
        assert_eq!(registration.resources.len(), 1);
    }

    #[test]
    fn test_document_metadata_uses_namespace_label() {
        let registration = register("aux", vec![record("company_profile.pdf")]);

        let resources = registration.resources.list_resources();
        assert_eq!(resources[0].raw.name, "AUX - Company Profile");
        assert_eq!(resources[0].raw.uri, "file:///docs/company_profile.pdf");

        let tools = registration.tools.tools();
        let tool = tools
            .iter()
            .find(|t| t.name == "get_aux_company_profile")
            .unwrap();
        assert_eq!(
            tool.description.as_deref(),
            Some("Retrieve AUX Company Profile document")
        );
    }

    #[tokio::test]
    async fn test_document_tool_reports_missing_text() {
        let registration = register("aux", vec![record("blank.pdf")]);

        let result = registration
            .tools
            .call_tool("get_aux_blank", rmcp::model::JsonObject::new())
            .await
            .unwrap();
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("No text could be extracted"));
    }
}
