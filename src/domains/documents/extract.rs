//! Text extraction back-ends.
//!
//! Extraction is the only fallible step of serving a document, and it never
//! fails the request: [`document_text`] turns any failure into a short
//! description of the file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{error, info, warn};

use super::discovery::DocumentRecord;
use super::error::ExtractionError;
use crate::core::config::ExtractorKind;

/// Upper bound on extracted text, matching a 10 MiB output buffer.
pub const MAX_EXTRACTED_BYTES: usize = 10 * 1024 * 1024;

/// Bytes of the extraction program's stderr kept for error messages.
const MAX_STDERR_BYTES: u64 = 64 * 1024;

/// Extracts plain text from a document file.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Extract the text of the document at `path`.
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// Runs `pdftotext <path> -` and captures stdout.
///
/// The child is killed if the calling future is dropped, so a cancelled
/// request does not leave a process behind.
#[derive(Debug, Clone)]
pub struct PdftotextExtractor {
    program: String,
}

impl PdftotextExtractor {
    /// Use `pdftotext` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("pdftotext")
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PdftotextExtractor {
    fn name(&self) -> &str {
        &self.program
    }

    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let mut child = Command::new(&self.program)
            .arg(path)
            .arg("-")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExtractionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Stop reading one byte past the limit and kill the child, which also
        // closes its stderr.
        let read_stdout = async {
            let mut buf = Vec::new();
            if let Some(out) = stdout {
                out.take(MAX_EXTRACTED_BYTES as u64 + 1)
                    .read_to_end(&mut buf)
                    .await?;
            }
            if buf.len() > MAX_EXTRACTED_BYTES {
                child.start_kill()?;
            }
            Ok::<_, std::io::Error>(buf)
        };
        let read_stderr = async {
            match stderr {
                Some(err) => read_bounded(err, MAX_STDERR_BYTES).await,
                None => Ok(Vec::new()),
            }
        };

        let output_error = |source| ExtractionError::Output {
            program: self.program.clone(),
            source,
        };
        let (stdout, stderr) = tokio::try_join!(read_stdout, read_stderr).map_err(output_error)?;

        if stdout.len() > MAX_EXTRACTED_BYTES {
            child.wait().await.ok();
            return Err(ExtractionError::TooLarge {
                limit: MAX_EXTRACTED_BYTES,
            });
        }

        let status = child.wait().await.map_err(output_error)?;
        if !status.success() {
            return Err(ExtractionError::Failed {
                program: self.program.clone(),
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

/// Keep the first `limit` bytes of `reader` and discard the rest.
async fn read_bounded(reader: impl AsyncRead + Unpin, limit: u64) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut limited = reader.take(limit);
    limited.read_to_end(&mut buf).await?;
    tokio::io::copy(&mut limited.into_inner(), &mut tokio::io::sink()).await?;
    Ok(buf)
}

/// Parses the document in-process with `pdf-extract`.
#[derive(Debug, Clone, Default)]
pub struct BuiltinPdfExtractor;

#[async_trait]
impl TextExtractor for BuiltinPdfExtractor {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let path: PathBuf = path.to_path_buf();

        tokio::task::spawn_blocking(move || {
            let bytes = std::fs::read(&path).map_err(|source| ExtractionError::Read {
                path: path.clone(),
                source,
            })?;
            let text = pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| ExtractionError::parse(e.to_string()))?;
            if text.len() > MAX_EXTRACTED_BYTES {
                return Err(ExtractionError::TooLarge {
                    limit: MAX_EXTRACTED_BYTES,
                });
            }
            Ok(text)
        })
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
    }
}

/// Build the extractor selected in the configuration.
pub fn extractor_for(kind: ExtractorKind) -> Arc<dyn TextExtractor> {
    match kind {
        ExtractorKind::Pdftotext => Arc::new(PdftotextExtractor::new()),
        ExtractorKind::Builtin => Arc::new(BuiltinPdfExtractor),
    }
}

/// Extract the text of `record`, or describe the file when that is not possible.
pub async fn document_text(extractor: &dyn TextExtractor, record: &DocumentRecord) -> String {
    info!(
        "Extracting text from {} with {}",
        record.full_path.display(),
        extractor.name()
    );

    match extractor.extract(&record.full_path).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("No text extracted from {}", record.filename);
            describe(record, "No text could be extracted from this document.")
        }
        Err(e) => {
            error!("Text extraction failed for {}: {}", record.filename, e);
            describe(
                record,
                &format!("Text extraction not available in this environment. Error: {}", e),
            )
        }
    }
}

fn describe(record: &DocumentRecord, note: &str) -> String {
    format!(
        "File: {}\nLocation: {}\nNote: {}",
        record.filename,
        record.full_path.display(),
        note
    )
}
