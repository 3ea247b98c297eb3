//! Whole-file read/write primitives.
//!
//! All generated artifacts are written by full replacement; a rerun
//! regenerates them deterministically, so there is no partial-write
//! recovery.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::CoreError;
use crate::Result;

/// Whether all given paths exist as regular files.
pub fn file_exists<P: AsRef<Path>>(paths: &[P]) -> bool {
    paths.iter().all(|p| p.as_ref().is_file())
}

/// Read a file fully, returning `None` when it does not exist.
pub fn read_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "file not present");
            Ok(None)
        }
        Err(source) => Err(CoreError::io(path, source)),
    }
}

/// Overwrite a file with the given content, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|source| CoreError::io(path, source))?;
    info!(path = %path.display(), "created");
    Ok(())
}

/// Idempotent directory creation.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| CoreError::io(path, source))
}
