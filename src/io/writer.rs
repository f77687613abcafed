//! Serializing output documents.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::error::{Error, Result};

/// Write `doc` to `path`, overwriting any existing file.
///
/// Bytes go to a `.tmp` sibling first and are renamed over the destination
/// once fully flushed, so a failed write never leaves a truncated output
/// behind. Parent directories are created as needed.
pub fn write_document(doc: &mut Document, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| Error::FailedToCreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let staging = staging_path(path);
    match write_and_rename(doc, &staging, path) {
        Ok(()) => Ok(()),
        Err(err) => {
            let _ = fs::remove_file(&staging);
            Err(err)
        }
    }
}

fn write_and_rename(doc: &mut Document, staging: &Path, path: &Path) -> Result<()> {
    let file = File::create(staging).map_err(|source| Error::FailedToCreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    doc.save_to(&mut writer)
        .map_err(|err| write_error(path, io::Error::other(err.to_string())))?;
    writer.flush().map_err(|source| write_error(path, source))?;

    fs::rename(staging, path).map_err(|source| write_error(path, source))
}

fn write_error(path: &Path, source: io::Error) -> Error {
    Error::FailedToWrite {
        path: path.to_path_buf(),
        source,
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "output.pdf".into());
    name.push(".tmp");
    path.with_file_name(name)
}
