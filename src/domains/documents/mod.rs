//! Documents domain module.
//!
//! Everything the server knows about the files it exposes:
//!
//! - `discovery.rs` - one-off directory scan producing [`DocumentRecord`]s
//! - `naming.rs` - tool identifiers and display names derived from file names
//! - `extract.rs` - text extraction with a metadata fallback

pub mod discovery;
mod error;
pub mod extract;
pub mod naming;

pub use discovery::{DocumentRecord, DocumentSource, FsDocumentSource, scan_directory};
pub use error::ExtractionError;
pub use extract::{
    BuiltinPdfExtractor, PdftotextExtractor, TextExtractor, document_text, extractor_for,
};
pub use naming::{display_name, tool_identifier};
