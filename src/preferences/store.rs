//! Key-value preference stores.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dashmap::DashMap;
use thiserror::Error;

/// Errors raised while persisting preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preferences IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preferences file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("preferences lock poisoned")]
    Poisoned,
}

/// Device-local string preferences.
///
/// `get` returns an empty string for keys that were never set.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> String;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: DashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> String {
        self.values
            .get(key)
            .map(|v| v.value().clone())
            .unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk, written through on every `set`.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    /// Open the store at `path`. A missing file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = ?path, entries = values.len(), "Preferences loaded");

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `values` to a sibling temp file, then rename it over the target.
    ///
    /// The file on disk is either the old or the new content, never a prefix.
    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let content = serde_json::to_string_pretty(values)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> String {
        match self.values.lock() {
            Ok(values) => values.get(key).cloned().unwrap_or_default(),
            Err(_) => {
                tracing::error!(key, "Preferences lock poisoned on read");
                String::new()
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().map_err(|_| PreferenceError::Poisoned)?;
        let mut updated = values.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated)?;
        *values = updated;
        tracing::debug!(key, value, "Preference saved");
        Ok(())
    }
}
