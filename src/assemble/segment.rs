//! The page accumulator behind both assembly paths.

use std::path::Path;

use lopdf::{Document, Object, ObjectId, dictionary};

use crate::error::Result;
use crate::io::writer;

/// A mutable output document under construction.
///
/// Exactly one segment is open at any time during an operation. Pages are
/// appended one at a time; [`OpenSegment::seal`] consumes the segment by
/// value, builds the page tree and catalog, and flushes the bytes to disk
/// before the caller may open the next one. Memory is therefore bounded to a
/// single accumulator regardless of how many outputs an operation produces.
#[derive(Debug)]
pub struct OpenSegment {
    document: Document,
    page_ids: Vec<ObjectId>,
}

impl OpenSegment {
    /// Open a fresh, empty segment.
    pub fn new() -> Self {
        Self {
            document: Document::with_version("1.5"),
            page_ids: Vec::new(),
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append a single page from `source`, deep-copying the page object and
    /// every object it references into the accumulator.
    ///
    /// All pages appended this way must come from the same source document,
    /// so their object ids share one id space and cannot collide.
    pub fn append_page(&mut self, source: &Document, page_id: ObjectId) -> Result<()> {
        let mut page = source.get_object(page_id)?.as_dict()?.clone();
        // The source's page-tree node must not leak into the output; a fresh
        // Parent is assigned at seal time.
        page.remove(b"Parent");

        copy_referenced(&mut self.document, source, &Object::Dictionary(page.clone()));
        self.document.objects.insert(page_id, Object::Dictionary(page));
        self.document.max_id = self.document.max_id.max(page_id.0);
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Append every page of `doc` in its native order, returning how many
    /// pages were added.
    ///
    /// The incoming document is renumbered above the accumulator's id space
    /// first, so documents from unrelated sources can be appended back to
    /// back without object-id collisions.
    pub fn append_all_pages(&mut self, mut doc: Document) -> usize {
        doc.renumber_objects_with(self.document.max_id + 1);
        self.document.max_id = self.document.max_id.max(doc.max_id);

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        self.document.objects.extend(doc.objects);

        for id in &page_ids {
            if let Some(Object::Dictionary(page)) = self.document.objects.get_mut(id) {
                page.remove(b"Parent");
            }
        }

        let appended = page_ids.len();
        self.page_ids.extend(page_ids);
        appended
    }

    /// Close the segment: build the page tree and catalog over the appended
    /// pages, renumber and compress, and serialize to `path`.
    ///
    /// Consumes the segment, so a sealed output can never be mutated again.
    pub fn seal(mut self, path: &Path) -> Result<()> {
        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect();
        let count = self.page_ids.len() as i64;

        let pages_id = self.document.add_object(dictionary! {
            "Type" => Object::Name(b"Pages".to_vec()),
            "Kids" => Object::Array(kids),
            "Count" => Object::Integer(count),
        });

        for id in &self.page_ids {
            if let Some(Object::Dictionary(page)) = self.document.objects.get_mut(id) {
                page.set("Parent", Object::Reference(pages_id));
            }
        }

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => Object::Name(b"Catalog".to_vec()),
            "Pages" => Object::Reference(pages_id),
        });
        self.document.trailer.set("Root", Object::Reference(catalog_id));

        self.document.renumber_objects();
        self.document.compress();

        writer::write_document(&mut self.document, path)
    }
}

impl Default for OpenSegment {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy every object reachable from `obj` out of `source` into `target`,
/// skipping ids already present.
fn copy_referenced(target: &mut Document, source: &Document, obj: &Object) {
    match obj {
        Object::Reference(id) => {
            if !target.objects.contains_key(id)
                && let Ok(referenced) = source.get_object(*id)
            {
                target.objects.insert(*id, referenced.clone());
                target.max_id = target.max_id.max(id.0);
                copy_referenced(target, source, referenced);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                copy_referenced(target, source, value);
            }
        }
        Object::Array(array) => {
            for item in array {
                copy_referenced(target, source, item);
            }
        }
        Object::Stream(stream) => {
            copy_referenced(target, source, &Object::Dictionary(stream.dict.clone()));
        }
        _ => {}
    }
}
