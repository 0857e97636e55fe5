//! Document discovery.
//!
//! Scans a directory once at startup and describes every file whose extension
//! matches the configured document type. Discovery never fails: a missing or
//! unreadable directory yields an empty list so the server still starts.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// A document found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    /// File name including the extension.
    pub filename: String,

    /// Directory joined with the file name.
    pub full_path: PathBuf,

    /// File name without the matched extension.
    pub base_name: String,
}

impl DocumentRecord {
    /// The `file://` URI under which the document is exposed as a resource.
    pub fn uri(&self) -> String {
        format!("file://{}", self.full_path.display())
    }
}

/// Source of document records, injected into the server.
pub trait DocumentSource: Send + Sync {
    /// List the documents in `directory`, in directory-listing order.
    fn scan(&self, directory: &Path) -> Vec<DocumentRecord>;
}

/// Scans the local file system.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    extension: String,
}

impl FsDocumentSource {
    /// Create a source matching files with `extension` (no leading dot).
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl DocumentSource for FsDocumentSource {
    fn scan(&self, directory: &Path) -> Vec<DocumentRecord> {
        scan_directory(directory, &self.extension)
    }
}

/// List the files in `directory` whose extension matches `extension`
/// case-insensitively.
///
/// The order is whatever the directory listing returns; it is not sorted.
pub fn scan_directory(directory: &Path, extension: &str) -> Vec<DocumentRecord> {
    if !directory.exists() {
        warn!("Document directory not found: {}", directory.display());
        return Vec::new();
    }

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            error!(
                "Error reading document directory {}: {}",
                directory.display(),
                e
            );
            return Vec::new();
        }
    };

    let suffix = format!(".{}", extension);
    let mut records = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error reading directory entry: {}", e);
                continue;
            }
        };

        let file_name = entry.file_name();
        let Some(filename) = file_name.to_str() else {
            warn!("Skipping non UTF-8 file name: {:?}", file_name);
            continue;
        };

        let Some(base_name) = strip_extension(filename, &suffix) else {
            continue;
        };

        if !entry.path().is_file() {
            continue;
        }

        records.push(DocumentRecord {
            filename: filename.to_string(),
            full_path: directory.join(filename),
            base_name: base_name.to_string(),
        });
    }

    info!(
        "Found {} document(s) in {}",
        records.len(),
        directory.display()
    );

    records
}

/// Strip `suffix` (case-insensitive) from `filename`, if there is a non-empty
/// stem left.
fn strip_extension<'a>(filename: &'a str, suffix: &str) -> Option<&'a str> {
    let split = filename.len().checked_sub(suffix.len())?;
    if split == 0 || !filename.is_char_boundary(split) {
        return None;
    }
    let (stem, ext) = filename.split_at(split);
    ext.eq_ignore_ascii_case(suffix).then_some(stem)
}
