//! Codec bindings: opening source documents and serializing outputs.

pub mod reader;
pub mod writer;

pub use reader::{SourceDocument, open_document};
pub use writer::write_document;
