//! Bibliographic metadata from an FB2 `title-info` block.

use log::debug;
use roxmltree::{Document, Node};

use crate::error::{Fb2Error, Result};
use crate::xml::{qualify_path, select};

/// FictionBook 2.0 schema namespace
pub const NAMESPACE: &str = "http://www.gribuser.ru/xml/fictionbook/2.0";

/// Prefix bound to [`NAMESPACE`] in metadata queries
pub const NAMESPACE_PREFIX: &str = "fb2";

const NAMESPACES: &[(&str, &str)] = &[(NAMESPACE_PREFIX, NAMESPACE)];

const FIRST_NAME_PATH: &str = "//description/title-info/author/first-name";
const LAST_NAME_PATH: &str = "//description/title-info/author/last-name";
const BOOK_TITLE_PATH: &str = "//description/title-info/book-title";
const SEQUENCE_PATH: &str = "//description/title-info/sequence";

/// Metadata needed to name a book file.
///
/// Series fields are only set when the document has a `sequence` element;
/// either attribute may still be missing on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookMetadata {
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub book_title: Option<String>,
    pub series_name: Option<String>,
    pub series_number: Option<String>,
}

/// Extract [`BookMetadata`] from a parsed FB2 document.
///
/// The author names and the book title are mandatory elements; a missing one
/// is a [`Fb2Error::MetadataNotFound`]. When a path matches several elements
/// (e.g. co-authors) the first in document order is used.
pub fn read_metadata(doc: &Document) -> Result<BookMetadata> {
    let mut metadata = BookMetadata {
        author_first_name: read_text(doc, "first-name", FIRST_NAME_PATH)?,
        author_last_name: read_text(doc, "last-name", LAST_NAME_PATH)?,
        book_title: read_text(doc, "book-title", BOOK_TITLE_PATH)?,
        ..Default::default()
    };

    if let Some(sequence) = find_first(doc, SEQUENCE_PATH)? {
        metadata.series_name = sequence.attribute("name").map(str::to_string);
        metadata.series_number = sequence.attribute("number").map(str::to_string);
    }

    debug!("Extracted metadata: {:?}", metadata);
    Ok(metadata)
}

/// Text of a mandatory element; the element must exist, its text may not.
fn read_text(doc: &Document, field: &'static str, path: &str) -> Result<Option<String>> {
    let element = find_first(doc, path)?.ok_or_else(|| Fb2Error::MetadataNotFound {
        field,
        path: path.to_string(),
    })?;

    Ok(element.text().map(str::to_string))
}

fn find_first<'a, 'input>(
    doc: &'a Document<'input>,
    path: &str,
) -> Result<Option<Node<'a, 'input>>> {
    let qualified = qualify_path(path, NAMESPACE_PREFIX);
    let matches = select(doc, &qualified, NAMESPACES)?;
    Ok(matches.first().copied())
}
