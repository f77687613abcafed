//! Metadata pass-through for the `read` feature.
//!
//! No logic beyond field extraction lives here: the trailer's Info
//! dictionary is read as-is and handed back for display.

use std::path::Path;

use lopdf::{Dictionary, Object};
use serde::Serialize;

use crate::error::Result;
use crate::io::reader;

/// Document information from the trailer Info dictionary.
///
/// Any field may be absent; non-UTF-8 values are treated as absent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub page_count: usize,
}

/// Open the document at `path` and pass its Info fields through.
pub fn read_document_info(path: &Path) -> Result<DocumentInfo> {
    let source = reader::open_document(path)?;

    let mut info = DocumentInfo {
        page_count: source.page_count,
        ..DocumentInfo::default()
    };

    if let Ok(info_ref) = source.document.trailer.get(b"Info").and_then(|obj| obj.as_reference())
        && let Ok(Object::Dictionary(dict)) = source.document.get_object(info_ref)
    {
        info.title = string_field(dict, b"Title");
        info.author = string_field(dict, b"Author");
        info.subject = string_field(dict, b"Subject");
        info.creator = string_field(dict, b"Creator");
        info.producer = string_field(dict, b"Producer");
    }

    Ok(info)
}

fn string_field(dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        Object::String(bytes, _) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    })
}
