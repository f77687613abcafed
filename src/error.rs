//! Error types for pdfed.
//!
//! One enum covers every failure the resolver, assembly engine, and codec
//! bindings can produce. Variants carry path context so messages are
//! actionable, and each maps to a process exit code.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfed operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source path does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A source path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// The codec could not parse the document at `path`.
    #[error("Failed to open PDF: {}\n  Reason: {reason}", path.display())]
    FailedToOpen { path: PathBuf, reason: String },

    /// Split requires at least one page to bound the terminal segment.
    #[error("PDF has no pages: {}", path.display())]
    EmptyDocument { path: PathBuf },

    /// Merge requested with no sources, or none of them could be opened.
    #[error("No input documents to merge")]
    NothingToMerge,

    /// Output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be written or persisted.
    #[error("Failed to write output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document's object graph is not usable for page assembly.
    #[error("Invalid PDF structure: {reason}")]
    Malformed { reason: String },

    /// User declined a confirmation prompt.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// I/O failure without a more specific home (prompts, metadata checks).
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Self::Malformed {
            reason: err.to_string(),
        }
    }
}

impl Error {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// Create a FailedToOpen error.
    pub fn failed_to_open(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToOpen {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Malformed error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// True for per-source failures the merge path recovers from by
    /// skipping the entry and recording it, rather than aborting the batch.
    pub fn is_missing_source(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::NotAFile { .. } | Self::FailedToOpen { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::FailedToOpen { .. } => 3,
            Self::EmptyDocument { .. } => 3,
            Self::NothingToMerge => 1,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Malformed { .. } => 6,
            Self::Cancelled => 130, // Standard exit code for SIGINT
            Self::Io { .. } => 5,
        }
    }
}
