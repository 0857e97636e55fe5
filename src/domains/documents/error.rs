//! Document extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting text from a document.
///
/// None of these reach the client: they are turned into a metadata-only
/// description of the document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The extraction program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The output of the extraction program could not be read.
    #[error("failed to read output of {program}: {source}")]
    Output {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The extraction program exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The extracted text is larger than the output limit.
    #[error("extracted text exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// The document could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-process parser rejected the document.
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// The blocking extraction task panicked or was cancelled.
    #[error("extraction task failed: {0}")]
    Task(String),
}

impl ExtractionError {
    /// Create a new "parse" error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
