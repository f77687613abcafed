//! Opening source documents.

use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::error::{Error, Result};

/// A successfully opened source document.
#[derive(Debug)]
pub struct SourceDocument {
    /// The parsed document.
    pub document: Document,
    /// Path it was loaded from.
    pub path: PathBuf,
    /// Number of pages.
    pub page_count: usize,
}

/// Open the document at `path`.
///
/// Existence and regular-file checks run before the codec touches the path,
/// so a missing file surfaces as [`Error::NotFound`] rather than a parse
/// error. Parse failures become [`Error::FailedToOpen`] with the codec's
/// reason attached.
pub fn open_document(path: &Path) -> Result<SourceDocument> {
    check_path(path)?;

    let document = Document::load(path)
        .map_err(|err| Error::failed_to_open(path, err.to_string()))?;
    let page_count = document.get_pages().len();

    Ok(SourceDocument {
        document,
        path: path.to_path_buf(),
        page_count,
    })
}

fn check_path(path: &Path) -> Result<()> {
    if !path.try_exists()? {
        return Err(Error::not_found(path));
    }
    if !path.is_file() {
        return Err(Error::not_a_file(path));
    }
    Ok(())
}
