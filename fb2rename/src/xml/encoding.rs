//! Byte-to-text decoding for XML documents.
//!
//! FB2 files in the wild are often stored in legacy code pages such as
//! windows-1251, so the raw bytes are decoded before parsing:
//! - a byte-order mark wins,
//! - otherwise the `encoding` of the XML declaration is used,
//! - otherwise the document is taken to be UTF-8.

use encoding_rs::{Encoding, UTF_8};
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{Fb2Error, Result};

/// Decode raw document bytes to text, returning the encoding that was used.
pub(crate) fn decode_document(bytes: &[u8]) -> Result<(String, &'static Encoding)> {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => match declared_encoding(bytes)? {
            // A declaration readable as 8-bit text cannot really be UTF-16
            Some(label) => Encoding::for_label(label.as_bytes())
                .map(Encoding::output_encoding)
                .ok_or_else(|| {
                    Fb2Error::MalformedDocument(format!("unsupported encoding '{}'", label))
                })?,
            None => UTF_8,
        },
    };

    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(Fb2Error::MalformedDocument(format!(
            "document is not valid {}",
            encoding.name()
        )));
    }

    Ok((text.into_owned(), encoding))
}

/// Read the `encoding` pseudo-attribute of the XML declaration, if any.
fn declared_encoding(bytes: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(bytes);

    match reader.read_event() {
        Ok(Event::Decl(decl)) => match decl.encoding() {
            Some(Ok(label)) => Ok(Some(String::from_utf8_lossy(&label).trim().to_string())),
            Some(Err(e)) => Err(Fb2Error::MalformedDocument(e.to_string())),
            None => Ok(None),
        },
        // Anything else is reported by the parser proper
        _ => Ok(None),
    }
}
