//! Rename FictionBook 2 (FB2) e-books after their metadata.
//!
//! The pipeline reads `title-info` from the document, builds a name of the
//! form `Author - SERIES## - Title` and renames the file next to itself:
//!
//! - [`xml`]: decoding, parsing and path queries
//! - [`metadata`]: the fields a name is made of
//! - [`naming`]: the naming rules
//! - [`rename`]: the filesystem side

pub mod error;
pub mod metadata;
pub mod naming;
pub mod rename;
pub mod xml;

pub use error::{Fb2Error, Result};
pub use metadata::{BookMetadata, read_metadata};
pub use naming::construct_name;
pub use rename::rename_file;

use log::debug;
use std::path::{Path, PathBuf};
use xml::{parse_document, read_document};

/// Outcome of a successful [`process`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Read the book at `path`, build its new name and rename it in place.
///
/// Nothing is renamed unless every step before the rename succeeded.
pub fn process(path: &Path) -> Result<Renamed> {
    let text = read_document(path)?;
    let document = parse_document(&text)?;
    let metadata = read_metadata(&document)?;
    let stem = construct_name(&metadata);
    debug!("Constructed name: {:?}", stem);

    let to = rename_file(path, &stem)?;
    Ok(Renamed {
        from: path.to_path_buf(),
        to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NS: &str = "http://www.gribuser.ru/xml/fictionbook/2.0";

    fn write_book(dir: &TempDir, file_name: &str, title_info: &str) -> PathBuf {
        let path = dir.path().join(file_name);
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<FictionBook xmlns="{}">
  <description><title-info>{}</title-info></description>
  <body/>
</FictionBook>"#,
            NS, title_info
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_process_renames_book() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_book(
            &temp_dir,
            "download (1).fb2",
            r#"<author><first-name>Jane</first-name><last-name>Doe</last-name></author>
<book-title>Example Title</book-title>"#,
        );

        let renamed = process(&path).unwrap();

        assert_eq!(renamed.from, path);
        assert_eq!(renamed.to, temp_dir.path().join("Jane Doe - Example Title.fb2"));
        assert!(!path.exists());
        assert!(renamed.to.exists());
    }

    #[test]
    fn test_process_with_series() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_book(
            &temp_dir,
            "x.fb2",
            r#"<author><first-name>J</first-name><last-name>R</last-name></author>
<book-title>Book</book-title>
<sequence name="The Great Saga" number="3"/>"#,
        );

        let renamed = process(&path).unwrap();
        assert_eq!(renamed.to, temp_dir.path().join("J R - GS03 - Book.fb2"));
    }

    #[test]
    fn test_process_empty_author_and_colon_title() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_book(
            &temp_dir,
            "x.fb2",
            r#"<author><first-name/><last-name/></author>
<book-title>Solo: Part One</book-title>"#,
        );

        let renamed = process(&path).unwrap();
        assert_eq!(renamed.to, temp_dir.path().join("Solo Part One.fb2"));
    }

    #[test]
    fn test_process_windows_1251_book() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("voina.fb2");
        let source = format!(
            r#"<?xml version="1.0" encoding="windows-1251"?>
<FictionBook xmlns="{}"><description><title-info>
<author><first-name>Лев</first-name><last-name>Толстой</last-name></author>
<book-title>Война и мир</book-title>
<sequence name="Собрание сочинений" number="5"/>
</title-info></description></FictionBook>"#,
            NS
        );
        let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(&source);
        fs::write(&path, &bytes).unwrap();

        let renamed = process(&path).unwrap();
        assert_eq!(
            renamed.to,
            temp_dir.path().join("Лев Толстой - СС05 - Война и мир.fb2")
        );
    }

    #[test]
    fn test_process_missing_title_does_not_rename() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_book(
            &temp_dir,
            "untitled.fb2",
            r#"<author><first-name>Jane</first-name><last-name>Doe</last-name></author>"#,
        );

        let result = process(&path);

        assert!(matches!(
            result,
            Err(Fb2Error::MetadataNotFound { field: "book-title", .. })
        ));
        assert!(path.exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_process_malformed_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.fb2");
        fs::write(&path, "<FictionBook><description></FictionBook>").unwrap();

        let result = process(&path);

        assert!(matches!(result, Err(Fb2Error::MalformedDocument(_))));
        assert!(path.exists());
    }

    #[test]
    fn test_process_twice_fails_on_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_book(
            &temp_dir,
            "x.fb2",
            r#"<author><first-name>A</first-name><last-name>B</last-name></author>
<book-title>T</book-title>"#,
        );

        process(&path).unwrap();
        let result = process(&path);
        assert!(matches!(result, Err(Fb2Error::Read { .. })));
    }
}
