//! Source resolution: user tokens to concrete document paths.
//!
//! Tokens are file or directory paths. A token that already ends in the
//! document extension passes through untouched, with no directory check.
//! Anything else is classified against the filesystem: directories expand to
//! their immediate regular files, in whatever order the filesystem enumerates
//! them. That order is platform-dependent and deliberately not canonicalized
//! here. Resolution never opens a document; missing or unreadable files are
//! the assembly engine's problem, so one bad entry cannot block the rest of
//! the list.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extension every resolved document path carries.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Output filename used when a merge is given a blank output token.
pub const DEFAULT_MERGE_OUTPUT: &str = "merged.pdf";

/// How a token was classified during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Names a single document.
    File,
    /// Names a directory whose immediate files were expanded.
    Directory,
    /// Not yet classified.
    Unresolved,
}

/// A user-supplied token together with its resolved kind.
///
/// Classified exactly once by [`resolve_sources`]; immutable after.
#[derive(Debug, Clone)]
pub struct DocumentToken {
    pub raw: String,
    pub kind: TokenKind,
}

impl DocumentToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            kind: TokenKind::Unresolved,
        }
    }
}

/// Non-fatal problems encountered while resolving.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionIssue {
    #[error("Cannot read directory {}: {reason}", path.display())]
    UnreadableDirectory { path: PathBuf, reason: String },

    #[error("No files in directory: {}", path.display())]
    EmptyDirectory { path: PathBuf },
}

/// Result of resolving a token list.
///
/// `sources` is ordered; insertion order is merge order. Duplicates are
/// kept, so a source listed twice is merged twice.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Concrete document paths, in merge order.
    pub sources: Vec<PathBuf>,
    /// The input tokens with their resolved kinds, in input order.
    pub tokens: Vec<DocumentToken>,
    /// Non-fatal problems, for the caller to report.
    pub issues: Vec<ResolutionIssue>,
}

/// Resolve user tokens into an ordered list of document paths.
///
/// An empty token list yields an empty [`Resolution`]; whether that is an
/// error is the caller's decision (merge requires at least one source).
pub fn resolve_sources<T>(tokens: T) -> Resolution
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolution = Resolution::default();

    for raw in tokens {
        let raw = raw.as_ref();
        let mut token = DocumentToken::new(raw);

        if has_document_extension(raw) {
            token.kind = TokenKind::File;
            resolution.sources.push(PathBuf::from(raw));
        } else if Path::new(raw).is_dir() {
            token.kind = TokenKind::Directory;
            expand_directory(Path::new(raw), &mut resolution);
        } else {
            token.kind = TokenKind::File;
            resolution.sources.push(normalize_document_path(raw));
        }

        resolution.tokens.push(token);
    }

    resolution
}

/// Append the directory's immediate regular files, extension-normalized,
/// in the filesystem's enumeration order. Subdirectories and symlinks are
/// not expanded.
fn expand_directory(dir: &Path, resolution: &mut Resolution) {
    let before_sources = resolution.sources.len();
    let before_issues = resolution.issues.len();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                resolution.sources.push(normalize_entry(entry.into_path()));
            }
            Ok(_) => {}
            Err(err) => resolution.issues.push(ResolutionIssue::UnreadableDirectory {
                path: dir.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }

    if resolution.sources.len() == before_sources && resolution.issues.len() == before_issues {
        resolution.issues.push(ResolutionIssue::EmptyDirectory {
            path: dir.to_path_buf(),
        });
    }
}

/// Normalize a single-document token: append the extension when absent.
///
/// Used for every single-path operation (merge entries, split and read
/// inputs), keeping the invariant that every path handed to the codec has a
/// concrete extension.
pub fn normalize_document_path(token: &str) -> PathBuf {
    if has_document_extension(token) {
        PathBuf::from(token)
    } else {
        PathBuf::from(format!("{token}.{DOCUMENT_EXTENSION}"))
    }
}

/// Normalize a merge output token: blank falls back to
/// [`DEFAULT_MERGE_OUTPUT`], anything else gets the extension appended when
/// missing.
pub fn resolve_output_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        PathBuf::from(DEFAULT_MERGE_OUTPUT)
    } else {
        normalize_document_path(trimmed)
    }
}

/// True when the token ends in `.pdf`, ASCII case-insensitively.
fn has_document_extension(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".pdf")
}

fn normalize_entry(path: PathBuf) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION) => path,
        _ => {
            let mut raw = path.into_os_string();
            raw.push(".");
            raw.push(DOCUMENT_EXTENSION);
            PathBuf::from(raw)
        }
    }
}
