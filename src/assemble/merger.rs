//! The merge path: concatenate sources into one output document.
//!
//! Merging is two-phase so the caller can interpose a confirmation between
//! staging and serialization. [`stage_merge`] accumulates every readable
//! source into a single open segment, recording unreadable ones instead of
//! aborting. When any source was skipped, [`merge`] gives its caller the
//! chance to decline before anything touches the disk; declining leaves no
//! output file behind.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::assemble::segment::OpenSegment;
use crate::error::{Error, Result};
use crate::io::reader;

/// A source that contributed pages to the merge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedSource {
    pub path: PathBuf,
    pub pages: usize,
}

/// A source that was skipped because it could not be opened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingSource {
    pub path: PathBuf,
    pub reason: String,
}

/// A staged, not yet serialized merge.
///
/// Holds the single accumulating segment plus the per-source outcome lists.
#[derive(Debug)]
pub struct StagedMerge {
    segment: OpenSegment,
    /// Sources that contributed pages, in merge order.
    pub merged: Vec<MergedSource>,
    /// Sources skipped because they could not be opened, in input order.
    pub missing: Vec<MissingSource>,
}

impl StagedMerge {
    /// True when at least one source was skipped.
    pub fn is_partial(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Pages accumulated so far.
    pub fn page_count(&self) -> usize {
        self.segment.page_count()
    }

    /// Seal the accumulated pages and serialize them to `output`,
    /// overwriting an existing file.
    ///
    /// Fails with [`Error::NothingToMerge`] when no source could be opened
    /// at all; a zero-source merge must not write an output.
    pub fn write_to(self, output: &Path) -> Result<MergeReport> {
        if self.merged.is_empty() {
            return Err(Error::NothingToMerge);
        }

        let total_pages = self.segment.page_count();
        self.segment.seal(output)?;

        Ok(MergeReport {
            output: output.to_path_buf(),
            total_pages,
            sources: self.merged,
            skipped: self.missing,
        })
    }
}

/// Outcome of a completed merge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    pub output: PathBuf,
    pub total_pages: usize,
    pub sources: Vec<MergedSource>,
    pub skipped: Vec<MissingSource>,
}

/// Accumulate `sources` into a staged merge, in strict list order.
///
/// A source that cannot be opened is recorded and skipped; the batch never
/// aborts on a missing entry. Fails immediately with
/// [`Error::NothingToMerge`] when `sources` is empty.
pub fn stage_merge(sources: &[PathBuf]) -> Result<StagedMerge> {
    if sources.is_empty() {
        return Err(Error::NothingToMerge);
    }

    let mut staged = StagedMerge {
        segment: OpenSegment::new(),
        merged: Vec::new(),
        missing: Vec::new(),
    };

    for path in sources {
        match reader::open_document(path) {
            Ok(source) => {
                let pages = staged.segment.append_all_pages(source.document);
                staged.merged.push(MergedSource {
                    path: path.clone(),
                    pages,
                });
            }
            Err(err) if err.is_missing_source() => {
                staged.missing.push(MissingSource {
                    path: path.clone(),
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(staged)
}

/// Merge `sources` into `output`.
///
/// When the staged result is partial, `confirm` decides whether to proceed
/// with the surviving sources; declining returns [`Error::Cancelled`] with
/// no output file created. The output page order is the strict
/// concatenation of the surviving sources' native page order.
pub fn merge<F>(sources: &[PathBuf], output: &Path, confirm: F) -> Result<MergeReport>
where
    F: FnOnce(&StagedMerge) -> bool,
{
    let staged = stage_merge(sources)?;
    if staged.is_partial() && !confirm(&staged) {
        return Err(Error::Cancelled);
    }
    staged.write_to(output)
}
