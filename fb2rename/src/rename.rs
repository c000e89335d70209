//! In-place file rename keeping the original extension.

use log::{info, warn};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::error::{Fb2Error, Result};

/// Path of the renamed file: same directory, new stem, original extension.
///
/// The extension is copied exactly as written (`book.FB2` keeps `.FB2`);
/// files without one stay without one.
pub fn target_path(path: &Path, stem: &str) -> PathBuf {
    let mut file_name = OsString::from(stem);
    if let Some(extension) = path.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    match path.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Rename `path` to `stem` plus its extension, in the same directory.
///
/// Never overwrites: an existing target is an error. Returns the new path.
pub fn rename_file(path: &Path, stem: &str) -> Result<PathBuf> {
    let target = target_path(path, stem);
    let fail = |source: io::Error| Fb2Error::Rename {
        from: path.to_path_buf(),
        to: target.clone(),
        source,
    };

    if stem.is_empty() {
        warn!("Refusing to rename {}: empty name", path.display());
        return Err(fail(io::Error::new(
            io::ErrorKind::InvalidInput,
            "constructed name is empty",
        )));
    }
    if stem.contains('/') || stem.contains(MAIN_SEPARATOR) {
        return Err(fail(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("constructed name '{}' contains a path separator", stem),
        )));
    }
    if target.symlink_metadata().is_ok() {
        return Err(fail(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "target already exists",
        )));
    }

    fs::rename(path, &target).map_err(fail)?;

    info!("Renamed {} -> {}", path.display(), target.display());
    Ok(target)
}
