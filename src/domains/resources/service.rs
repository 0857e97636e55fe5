//! Resource service implementation.
//!
//! The ResourceService holds one entry per registered document, in
//! registration order, and answers list and read requests. Entries are added
//! while the server is constructed and never change afterwards.

use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::error::ResourceError;
use crate::domains::documents::{DocumentRecord, TextExtractor, display_name, document_text};

/// Service for listing and reading document resources.
pub struct ResourceService {
    entries: Vec<ResourceEntry>,

    /// Key: resource URI, Value: position in `entries`.
    index: HashMap<String, usize>,

    extractor: Arc<dyn TextExtractor>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The document backing this resource.
    pub document: Arc<DocumentRecord>,
}

/// MIME type advertised for a document, by file extension.
pub fn mime_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

impl ResourceService {
    /// Create an empty service reading documents through `extractor`.
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            extractor,
        }
    }

    /// Register `document` as a resource named `"<label> - <Display Name>"`.
    pub fn register_document(
        &mut self,
        document: Arc<DocumentRecord>,
        label: &str,
    ) -> Result<&ResourceEntry, ResourceError> {
        let uri = document.uri();
        if self.index.contains_key(&uri) {
            return Err(ResourceError::Duplicate(uri));
        }

        let name = format!("{} - {}", label, display_name(&document.base_name));
        let mut raw = RawResource::new(uri.clone(), name);
        raw.mime_type = Some(mime_type_for(&document.filename).to_string());

        info!("Registering resource: {}", uri);
        let position = self.entries.len();
        self.index.insert(uri, position);
        self.entries.push(ResourceEntry {
            resource: raw.no_annotation(),
            document,
        });
        Ok(&self.entries[position])
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no resource is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List all available resources in registration order.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.entries
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    ///
    /// Extraction failures do not fail the read: the content then describes
    /// the file instead.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let position = self
            .index
            .get(uri)
            .copied()
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let entry = &self.entries[position];
        let text = document_text(self.extractor.as_ref(), &entry.document).await;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::documents::ExtractionError;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};

    struct FailingExtractor;

    #[async_trait]
    impl TextExtractor for FailingExtractor {
        fn name(&self) -> &str {
            "failing"
        }

        async fn extract(&self, _path: &Path) -> Result<String, ExtractionError> {
            Err(ExtractionError::parse("corrupt xref table"))
        }
    }

    struct UpperExtractor;

    #[async_trait]
    impl TextExtractor for UpperExtractor {
        fn name(&self) -> &str {
            "upper"
        }

        async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
            Ok(path.display().to_string().to_uppercase())
        }
    }

    fn record(filename: &str) -> Arc<DocumentRecord> {
        let base_name = filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(filename)
            .to_string();
        Arc::new(DocumentRecord {
            filename: filename.to_string(),
            full_path: PathBuf::from("/srv/docs").join(filename),
            base_name,
        })
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for("a.pdf"), "application/pdf");
        assert_eq!(mime_type_for("A.PDF"), "application/pdf");
        assert_eq!(mime_type_for("notes.txt"), "text/plain");
        assert_eq!(mime_type_for("blob"), "application/octet-stream");
    }

    #[test]
    fn test_register_document_metadata() {
        let mut service = ResourceService::new(Arc::new(UpperExtractor));
        let entry = service
            .register_document(record("company_profile.pdf"), "AUX")
            .unwrap();

        assert_eq!(entry.resource.raw.uri, "file:///srv/docs/company_profile.pdf");
        assert_eq!(entry.resource.raw.name, "AUX - Company Profile");
        assert_eq!(
            entry.resource.raw.mime_type.as_deref(),
            Some("application/pdf")
        );
    }

    #[test]
    fn test_register_duplicate_uri_fails() {
        let mut service = ResourceService::new(Arc::new(UpperExtractor));
        service.register_document(record("a.pdf"), "AUX").unwrap();

        let result = service.register_document(record("a.pdf"), "AUX");
        assert!(matches!(result, Err(ResourceError::Duplicate(_))));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let mut service = ResourceService::new(Arc::new(UpperExtractor));
        for name in ["z.pdf", "a.pdf", "m.pdf"] {
            service.register_document(record(name), "AUX").unwrap();
        }

        let uris: Vec<_> = service
            .list_resources()
            .into_iter()
            .map(|r| r.raw.uri)
            .collect();
        assert_eq!(
            uris,
            vec![
                "file:///srv/docs/z.pdf",
                "file:///srv/docs/a.pdf",
                "file:///srv/docs/m.pdf"
            ]
        );
    }

    #[tokio::test]
    async fn test_read_resource_returns_text() {
        let mut service = ResourceService::new(Arc::new(UpperExtractor));
        service.register_document(record("a.pdf"), "AUX").unwrap();

        let result = service
            .read_resource("file:///srv/docs/a.pdf")
            .await
            .unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, uri, .. } => {
                assert_eq!(text, "/SRV/DOCS/A.PDF");
                assert_eq!(uri, "file:///srv/docs/a.pdf");
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_resource_falls_back_to_metadata() {
        let mut service = ResourceService::new(Arc::new(FailingExtractor));
        service.register_document(record("broken.pdf"), "AUX").unwrap();

        let result = service
            .read_resource("file:///srv/docs/broken.pdf")
            .await
            .unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.starts_with("File: broken.pdf\n"));
                assert!(text.contains("Location: /srv/docs/broken.pdf"));
                assert!(text.contains("corrupt xref table"));
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_unknown_resource() {
        let service = ResourceService::new(Arc::new(UpperExtractor));
        let result = service.read_resource("file:///nope.pdf").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
