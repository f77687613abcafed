//! The split path: partition one document into contiguous segments.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use lopdf::ObjectId;
use serde::Serialize;

use crate::assemble::segment::OpenSegment;
use crate::error::{Error, Result};
use crate::io::reader;
use crate::resolver::DOCUMENT_EXTENSION;

/// Where split outputs land and how they are named.
///
/// Segment files are `{stem}{sequence}.pdf` under `output_dir`, with
/// sequence numbers starting at 1 in page order, so the output order is
/// recoverable from the names alone.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub output_dir: PathBuf,
    pub stem: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            stem: String::from("split"),
        }
    }
}

impl SplitOptions {
    fn segment_path(&self, sequence: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.{}", self.stem, sequence, DOCUMENT_EXTENSION))
    }
}

/// One sealed output segment, with 1-based inclusive page numbers for
/// display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSegment {
    pub sequence: usize,
    pub first_page: usize,
    pub last_page: usize,
    pub path: PathBuf,
}

/// Outcome of a completed split.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub source: PathBuf,
    pub page_count: usize,
    pub segments: Vec<SplitSegment>,
    /// Zero-based split points that were out of range and dropped,
    /// deduplicated and sorted like the accepted boundaries.
    pub rejected: Vec<usize>,
}

/// Split the document at `source` after each zero-based page index in
/// `points`.
///
/// A split point marks the last page of a segment. Points at or beyond the
/// page count are rejected into the report, not clamped, and the remaining
/// valid points still apply. The terminal point `page_count - 1` is always
/// present implicitly, so zero explicit points produce exactly one segment
/// holding the whole document. The resulting segments partition the page
/// range with no gaps and no overlaps.
pub fn split(source: &Path, points: &[usize], options: &SplitOptions) -> Result<SplitReport> {
    let loaded = reader::open_document(source)?;
    let page_count = loaded.page_count;
    if page_count == 0 {
        return Err(Error::EmptyDocument {
            path: source.to_path_buf(),
        });
    }

    let mut boundaries = BTreeSet::new();
    let mut rejected = BTreeSet::new();
    for &point in points {
        if point < page_count {
            boundaries.insert(point);
        } else {
            rejected.insert(point);
        }
    }
    boundaries.insert(page_count - 1);

    let page_ids: Vec<ObjectId> = loaded.document.get_pages().into_values().collect();

    let mut segments = Vec::new();
    let mut open = OpenSegment::new();
    let mut first_page = 0usize;

    for (index, page_id) in page_ids.iter().enumerate() {
        open.append_page(&loaded.document, *page_id)?;

        if boundaries.contains(&index) {
            let sequence = segments.len() + 1;
            let path = options.segment_path(sequence);
            open.seal(&path)?;
            segments.push(SplitSegment {
                sequence,
                first_page: first_page + 1,
                last_page: index + 1,
                path,
            });

            first_page = index + 1;
            open = OpenSegment::new();
        }
    }

    Ok(SplitReport {
        source: source.to_path_buf(),
        page_count,
        segments,
        rejected: rejected.into_iter().collect(),
    })
}
