use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{FeedbackError, Result};
use crate::fs::{delete_file_if_exists, read_file_if_exists, write_file_atomic};

use super::KeyValueStore;

/// File name of the store inside its data directory
pub const STORE_FILE_NAME: &str = "storage.json";

/// Store backed by a single JSON object on disk.
///
/// Every write rewrites the whole document through a temp file and rename,
/// so readers never see a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located in `dir/storage.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE_NAME))
    }

    /// The platform data directory for this application
    pub fn default_dir() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "feedback-form", "feedback-form")
            .ok_or_else(|| FeedbackError::Config("cannot determine data directory".to_string()))?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        match read_file_if_exists(&self.path)? {
            Some(content) if !content.trim().is_empty() => Ok(serde_json::from_str(&content)?),
            _ => Ok(BTreeMap::new()),
        }
    }

    /// Entries to update. A document that no longer parses is dropped and
    /// the write starts from an empty map.
    fn entries_for_update(&self) -> Result<BTreeMap<String, String>> {
        match self.read_entries() {
            Err(FeedbackError::Json(e)) => {
                tracing::warn!("Replacing corrupt store {}: {e}", self.path.display());
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;
        write_file_atomic(&self.path, &content)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(FeedbackError::Json(e)) => {
                tracing::warn!("Deleting corrupt store {}: {e}", self.path.display());
                return delete_file_if_exists(&self.path);
            }
            Err(e) => return Err(e),
        };
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
