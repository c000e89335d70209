use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Fb2Error {
    #[error("Metadata field '{field}' not found (query: {path})")]
    MetadataNotFound { field: &'static str, path: String },

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Invalid query path: {0}")]
    InvalidQuery(String),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {} to {}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Fb2Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_io_source_is_not_repeated_in_message() {
        let err = Fb2Error::Read {
            path: PathBuf::from("book.fb2"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Failed to read book.fb2");
        assert_eq!(err.source().unwrap().to_string(), "no such file");

        let err = Fb2Error::Rename {
            from: PathBuf::from("a.fb2"),
            to: PathBuf::from("b.fb2"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "target already exists"),
        };
        assert_eq!(err.to_string(), "Failed to rename a.fb2 to b.fb2");
    }
}
