//! Configuration management for the MCP server.
//!
//! The effective configuration is built from three layers, merged field by
//! field in precedence order: explicit overrides (CLI flags) win over
//! environment variables, which win over the built-in defaults. A layer that
//! only sets one field never blanks out the others.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Version reported when the configured one is not `MAJOR.MINOR.PATCH`.
pub const FALLBACK_VERSION: &str = "1.0.0";

/// Default listen port for network transports.
pub const DEFAULT_PORT: u16 = 8080;

/// Default directory scanned for documents.
pub const DEFAULT_DOCUMENT_DIRECTORY: &str = "./resources/pdfs";

/// Default server name reported to clients.
pub const DEFAULT_SERVER_NAME: &str = "AUX MCP Server";

/// Base URL of the upstream domain pricing/availability API.
pub const DEFAULT_DOMAIN_API_URL: &str =
    "https://nkpfrka0ek.execute-api.eu-west-1.amazonaws.com/prod/savvysites";

// Environment variables backing the three overridable fields.
pub const ENV_PORT: &str = "PORT";
pub const ENV_DOCUMENT_DIRECTORY: &str = "PDF_DIRECTORY";
pub const ENV_SERVER_NAME: &str = "MCP_NAME";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and listen port.
    pub server: ServerConfig,

    /// Document discovery and extraction.
    pub documents: DocumentsConfig,

    /// Upstream domain API used by the domain tools.
    pub domain_api: DomainApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server, always `MAJOR.MINOR.PATCH` once resolved.
    pub version: String,

    /// Port used by network transports.
    pub port: u16,
}

/// Configuration for document discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Directory scanned once at startup.
    pub directory: PathBuf,

    /// File extension (without the dot) matched case-insensitively.
    pub extension: String,

    /// Namespace used in retrieval tool names (`get_<namespace>_<id>`).
    pub namespace: String,

    /// Which text extraction back-end to use.
    pub extractor: ExtractorKind,
}

/// Available text extraction back-ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Shell out to the `pdftotext` utility.
    #[default]
    Pdftotext,

    /// Parse the document in-process with `pdf-extract`.
    Builtin,
}

impl ExtractorKind {
    /// Parse an extractor name as found in the environment.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pdftotext" => Some(Self::Pdftotext),
            "builtin" | "pdf-extract" => Some(Self::Builtin),
            _ => None,
        }
    }
}

/// Configuration for the upstream domain API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainApiConfig {
    /// Base URL; endpoint names are appended as path segments.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// One partial configuration layer.
///
/// Every field is optional; `None` means "this layer has no opinion".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub document_directory: Option<PathBuf>,
    pub server_name: Option<String>,
    pub server_version: Option<String>,
}

impl ConfigOverrides {
    /// Build the environment layer from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the environment layer from an arbitrary variable lookup.
    ///
    /// Empty values are ignored, and an unparsable port is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_empty(ENV_PORT).and_then(|raw| match raw.trim().parse() {
            Ok(port) => Some(port),
            Err(e) => {
                warn!("Ignoring invalid {} value '{}': {}", ENV_PORT, raw, e);
                None
            }
        });

        Self {
            port,
            document_directory: non_empty(ENV_DOCUMENT_DIRECTORY).map(PathBuf::from),
            server_name: non_empty(ENV_SERVER_NAME),
            server_version: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: DEFAULT_SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                port: DEFAULT_PORT,
            },
            documents: DocumentsConfig {
                directory: PathBuf::from(DEFAULT_DOCUMENT_DIRECTORY),
                extension: "pdf".to_string(),
                namespace: "aux".to_string(),
                extractor: ExtractorKind::default(),
            },
            domain_api: DomainApiConfig {
                base_url: DEFAULT_DOMAIN_API_URL.to_string(),
                timeout_secs: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load the effective configuration for this process.
    ///
    /// Merges defaults, the process environment and `explicit` (usually CLI
    /// flags). `.env` must already have been loaded by the caller.
    pub fn load(explicit: ConfigOverrides) -> Self {
        let mut defaults = Self::default();
        defaults.apply_ambient(|key| std::env::var(key).ok());

        Self::resolve(defaults, ConfigOverrides::from_env(), explicit)
    }

    /// Merge the three layers. Never fails.
    ///
    /// The version is validated once, after merging.
    pub fn resolve(defaults: Config, env: ConfigOverrides, explicit: ConfigOverrides) -> Config {
        let mut config = defaults;
        config.apply(env);
        config.apply(explicit);
        config.server.version = validate_semantic_version(&config.server.version);
        config
    }

    /// Apply one override layer on top of the current values.
    fn apply(&mut self, layer: ConfigOverrides) {
        if let Some(port) = layer.port {
            self.server.port = port;
        }
        if let Some(directory) = layer.document_directory {
            self.documents.directory = directory;
        }
        if let Some(name) = layer.server_name {
            self.server.name = name;
        }
        if let Some(version) = layer.server_version {
            self.server.version = version;
        }
    }

    /// Apply the settings that are only configurable through the environment.
    pub fn apply_ambient(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("MCP_LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            self.logging.level = level;
        }

        if let Some(namespace) = lookup("MCP_TOOL_NAMESPACE") {
            let namespace = crate::domains::documents::tool_identifier(&namespace);
            if namespace.is_empty() {
                warn!(
                    "MCP_TOOL_NAMESPACE normalizes to an empty identifier, keeping '{}'",
                    self.documents.namespace
                );
            } else {
                self.documents.namespace = namespace;
            }
        }

        if let Some(extension) = lookup("MCP_DOCUMENT_EXTENSION") {
            let extension = extension.trim().trim_start_matches('.').to_string();
            if !extension.is_empty() {
                self.documents.extension = extension;
            }
        }

        if let Some(raw) = lookup("MCP_PDF_EXTRACTOR") {
            match ExtractorKind::parse(&raw) {
                Some(kind) => self.documents.extractor = kind,
                None => warn!(
                    "Unknown MCP_PDF_EXTRACTOR '{}', using {:?}",
                    raw, self.documents.extractor
                ),
            }
        }

        if let Some(url) = lookup("MCP_DOMAIN_API_URL") {
            self.domain_api.base_url = url;
        }

        if let Some(raw) = lookup("MCP_DOMAIN_API_TIMEOUT_SECS") {
            match raw.trim().parse() {
                Ok(secs) => self.domain_api.timeout_secs = secs,
                Err(e) => warn!("Ignoring invalid MCP_DOMAIN_API_TIMEOUT_SECS '{}': {}", raw, e),
            }
        }

        self.transport = TransportConfig::from_lookup(&lookup);
    }
}

/// Check whether `version` is exactly `MAJOR.MINOR.PATCH` with ASCII digits.
pub fn is_semantic_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Return `version` unchanged if it is a semantic version, `1.0.0` otherwise.
pub fn validate_semantic_version(version: &str) -> String {
    if is_semantic_version(version) {
        version.to_string()
    } else {
        warn!(
            "Invalid semantic version '{}', using '{}' instead",
            version, FALLBACK_VERSION
        );
        FALLBACK_VERSION.to_string()
    }
}
