//! Split path end to end: partition, rejection, naming.

use std::path::Path;

use tempfile::tempdir;

use pdfed::Error;
use pdfed::assemble::{self, SplitOptions};

use crate::common::{create_test_pdf, page_widths};

fn options(dir: &Path) -> SplitOptions {
    SplitOptions {
        output_dir: dir.to_path_buf(),
        stem: String::from("split"),
    }
}

#[test]
fn segments_partition_and_reconstruct_the_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.pdf");
    let widths: Vec<i64> = (0..10).map(|i| 500 + i).collect();
    create_test_pdf(&source, &widths);

    let report = assemble::split(&source, &[2, 5], &options(dir.path())).unwrap();

    let ranges: Vec<(usize, usize)> = report
        .segments
        .iter()
        .map(|s| (s.first_page, s.last_page))
        .collect();
    assert_eq!(ranges, vec![(1, 3), (4, 6), (7, 10)]);

    // Concatenating the segments in sealed order rebuilds the original.
    let mut rebuilt = Vec::new();
    for segment in &report.segments {
        rebuilt.extend(page_widths(&segment.path));
    }
    assert_eq!(rebuilt, widths);
}

#[test]
fn zero_points_produce_one_whole_document_segment() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.pdf");
    create_test_pdf(&source, &[1, 2, 3, 4, 5]);

    let report = assemble::split(&source, &[], &options(dir.path())).unwrap();

    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].first_page, 1);
    assert_eq!(report.segments[0].last_page, 5);
}

#[test]
fn out_of_range_points_are_dropped_and_reported() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.pdf");
    create_test_pdf(&source, &[1, 2, 3]);

    let report = assemble::split(&source, &[5, 1], &options(dir.path())).unwrap();

    assert_eq!(report.rejected, vec![5]);
    let ranges: Vec<(usize, usize)> = report
        .segments
        .iter()
        .map(|s| (s.first_page, s.last_page))
        .collect();
    assert_eq!(ranges, vec![(1, 2), (3, 3)]);
}

#[test]
fn segment_names_are_order_recoverable() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.pdf");
    create_test_pdf(&source, &[1, 2, 3]);

    let custom = SplitOptions {
        output_dir: dir.path().join("out"),
        stem: String::from("chapter"),
    };
    let report = assemble::split(&source, &[0, 1], &custom).unwrap();

    let names: Vec<String> = report
        .segments
        .iter()
        .map(|s| s.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["chapter1.pdf", "chapter2.pdf", "chapter3.pdf"]);
    assert!(report.segments.iter().all(|s| s.path.exists()));
}

#[test]
fn splitting_a_missing_document_fails() {
    let dir = tempdir().unwrap();
    let err =
        assemble::split(&dir.path().join("gone.pdf"), &[], &options(dir.path())).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn split_segments_are_loadable_documents() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.pdf");
    create_test_pdf(&source, &[10, 20, 30, 40]);

    let report = assemble::split(&source, &[1], &options(dir.path())).unwrap();
    for segment in &report.segments {
        let doc = lopdf::Document::load(&segment.path).unwrap();
        assert_eq!(
            doc.get_pages().len(),
            segment.last_page - segment.first_page + 1
        );
    }
}
