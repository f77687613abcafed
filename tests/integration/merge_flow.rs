//! Merge path end to end: staging, confirmation, serialization.

use tempfile::tempdir;

use pdfed::Error;
use pdfed::assemble;

use crate::common::{create_test_pdf, page_widths};

#[test]
fn merge_is_strict_concatenation() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    let b = dir.path().join("b.pdf");
    let c = dir.path().join("c.pdf");
    create_test_pdf(&a, &[101, 102]);
    create_test_pdf(&b, &[201]);
    create_test_pdf(&c, &[301, 302, 303]);

    let out = dir.path().join("merged.pdf");
    let report = assemble::merge(&[a, b, c], &out, |_| true).unwrap();

    assert_eq!(report.total_pages, 6);
    assert_eq!(
        page_widths(&out),
        vec![101, 102, 201, 301, 302, 303]
    );
}

#[test]
fn one_missing_of_three_merges_the_rest_after_confirmation() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    let c = dir.path().join("c.pdf");
    create_test_pdf(&a, &[101]);
    create_test_pdf(&c, &[301, 302]);
    let missing = dir.path().join("b.pdf");

    let out = dir.path().join("merged.pdf");
    let report = assemble::merge(&[a, missing.clone(), c], &out, |staged| {
        assert!(staged.is_partial());
        assert_eq!(staged.missing[0].path, missing);
        true
    })
    .unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(page_widths(&out), vec![101, 301, 302]);
}

#[test]
fn declining_a_partial_merge_leaves_no_output() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    create_test_pdf(&a, &[101]);

    let out = dir.path().join("merged.pdf");
    let err = assemble::merge(&[a, dir.path().join("b.pdf")], &out, |_| false).unwrap_err();

    assert!(matches!(err, Error::Cancelled));
    assert!(!out.exists());
}

#[test]
fn complete_source_set_never_asks_for_confirmation() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    create_test_pdf(&a, &[101]);

    let out = dir.path().join("merged.pdf");
    assemble::merge(&[a], &out, |_| panic!("confirmation must not run")).unwrap();
    assert!(out.exists());
}

#[test]
fn merged_output_is_a_loadable_document() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    let b = dir.path().join("b.pdf");
    create_test_pdf(&a, &[100]);
    create_test_pdf(&b, &[200]);

    let out = dir.path().join("merged.pdf");
    assemble::merge(&[a, b], &out, |_| true).unwrap();

    let doc = lopdf::Document::load(&out).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
    assert!(doc.trailer.get(b"Root").is_ok());
}

#[test]
fn staged_merge_reports_per_source_page_counts() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.pdf");
    let b = dir.path().join("b.pdf");
    create_test_pdf(&a, &[1, 2, 3]);
    create_test_pdf(&b, &[4]);

    let staged = assemble::stage_merge(&[a, b]).unwrap();
    assert!(!staged.is_partial());
    assert_eq!(staged.page_count(), 4);
    assert_eq!(staged.merged[0].pages, 3);
    assert_eq!(staged.merged[1].pages, 1);
}
