//! Resolution feeding the merge path end to end.

use std::fs::File;
use std::path::PathBuf;

use tempfile::tempdir;

use pdfed::resolver::{self, TokenKind};

use crate::common::{create_test_pdf, page_widths};

#[test]
fn directory_token_expands_to_regular_files_only() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("x.pdf"), &[1]);
    create_test_pdf(&dir.path().join("y.pdf"), &[2]);
    std::fs::create_dir(dir.path().join("z")).unwrap();

    let token = dir.path().to_string_lossy().to_string();
    let resolution = resolver::resolve_sources([token]);

    let mut names: Vec<String> = resolution
        .sources
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["x.pdf", "y.pdf"]);
    assert_eq!(resolution.tokens[0].kind, TokenKind::Directory);
}

#[test]
fn resolving_twice_yields_identical_sources() {
    let dir = tempdir().unwrap();
    create_test_pdf(&dir.path().join("a.pdf"), &[1]);
    File::create(dir.path().join("b.txt")).unwrap();

    let token = dir.path().to_string_lossy().to_string();
    let first = resolver::resolve_sources([token.as_str()]);
    let second = resolver::resolve_sources([token.as_str()]);

    assert_eq!(first.sources, second.sources);
    // Resolution must not create or remove anything on disk.
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 2);
}

#[test]
fn resolved_directory_feeds_merge() {
    let dir = tempdir().unwrap();
    let docs = dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    create_test_pdf(&docs.join("x.pdf"), &[11]);
    create_test_pdf(&docs.join("y.pdf"), &[22]);

    let token = docs.to_string_lossy().to_string();
    let mut resolution = resolver::resolve_sources([token]);
    // Enumeration order is platform-dependent; pin it for the assertion.
    resolution.sources.sort();

    let out = dir.path().join("merged.pdf");
    let report = pdfed::assemble::merge(&resolution.sources, &out, |_| true).unwrap();

    assert_eq!(report.total_pages, 2);
    assert_eq!(page_widths(&out), vec![11, 22]);
}

#[test]
fn blank_output_token_defaults_to_merged_pdf() {
    assert_eq!(
        resolver::resolve_output_path("  "),
        PathBuf::from("merged.pdf")
    );
    assert_eq!(
        resolver::resolve_output_path("book"),
        PathBuf::from("book.pdf")
    );
}
