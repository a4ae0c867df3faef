//! Simple file I/O utilities for the draft store

use std::path::Path;

use crate::error::{FeedbackError, Result};

/// Read file content, returning `None` when the file does not exist
pub fn read_file_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FeedbackError::StorageError {
            operation: "read",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Write file atomically using temp file and rename.
///
/// The original file is never left partially written: either the new content
/// is fully in place, or the previous content is unchanged.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = path.with_extension("tmp");

    std::fs::write(&temp_path, content).map_err(|e| FeedbackError::StorageError {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| FeedbackError::StorageError {
        operation: "rename",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Ensure parent directory exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| FeedbackError::StorageError {
            operation: "create",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Delete a file, treating an already-missing file as success
pub fn delete_file_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FeedbackError::StorageError {
            operation: "delete",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
