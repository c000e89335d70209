//! XML loading and path queries.

mod encoding;
mod path;

pub use path::qualify_path;
pub(crate) use path::select;

use log::debug;
use roxmltree::Document;
use std::fs;
use std::path::Path;

use crate::error::{Fb2Error, Result};
use encoding::decode_document;

/// Read the file at `path` and decode it to text.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Fb2Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, encoding) = decode_document(&bytes)?;

    debug!("Read {} ({}, {} bytes)", path.display(), encoding.name(), bytes.len());
    Ok(text)
}

/// Parse decoded document text.
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    Document::parse(text).map_err(|e| Fb2Error::MalformedDocument(e.to_string()))
}
