//! Fixture builders shared by the unit tests.
//!
//! Generated documents carry a marker width in each page's MediaBox, so
//! page identity and order survive assembly and can be asserted after a
//! reload.

use std::path::Path;

use lopdf::{Document, Object, Stream, StringFormat, dictionary};

/// Write a minimal PDF with one page per entry of `widths`, each page's
/// MediaBox width set to the entry value.
pub fn create_test_pdf(path: &Path, widths: &[i64]) {
    build_document(widths, None).save(path).unwrap();
}

/// Like [`create_test_pdf`], with a trailer Info dictionary carrying a
/// title and author.
pub fn create_test_pdf_with_info(path: &Path, widths: &[i64], title: &str, author: &str) {
    build_document(widths, Some((title, author)))
        .save(path)
        .unwrap();
}

/// Load the document at `path` and return its pages' MediaBox widths in
/// page order.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let mediabox = page.get(b"MediaBox").unwrap().as_array().unwrap();
            match &mediabox[2] {
                Object::Integer(width) => *width,
                Object::Real(width) => *width as i64,
                other => panic!("unexpected MediaBox entry: {other:?}"),
            }
        })
        .collect()
}

fn build_document(widths: &[i64], info: Option<(&str, &str)>) -> Document {
    let mut doc = Document::with_version("1.5");

    let resources_id = doc.add_object(dictionary! {
        "ProcSet" => Object::Array(vec![Object::Name(b"PDF".to_vec())]),
    });

    let mut kids = Vec::new();
    for &width in widths {
        let content_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, vec![])));
        let page_id = doc.add_object(dictionary! {
            "Type" => Object::Name(b"Page".to_vec()),
            "MediaBox" => Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width),
                Object::Integer(842),
            ]),
            "Resources" => Object::Reference(resources_id),
            "Contents" => Object::Reference(content_id),
        });
        kids.push(page_id);
    }

    let pages_id = doc.add_object(dictionary! {
        "Type" => Object::Name(b"Pages".to_vec()),
        "Kids" => Object::Array(kids.iter().map(|id| Object::Reference(*id)).collect()),
        "Count" => Object::Integer(widths.len() as i64),
    });

    for page_id in &kids {
        if let Some(Object::Dictionary(page)) = doc.objects.get_mut(page_id) {
            page.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => Object::Name(b"Catalog".to_vec()),
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    if let Some((title, author)) = info {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::String(title.as_bytes().to_vec(), StringFormat::Literal),
            "Author" => Object::String(author.as_bytes().to_vec(), StringFormat::Literal),
        });
        doc.trailer.set("Info", Object::Reference(info_id));
    }

    doc.compress();
    doc
}
