//! Key/value persistence for the theme preference.
//!
//! The whole durable state of this crate is one key, [`DARK_MODE_KEY`],
//! holding `"true"` or `"false"`. The [`PreferenceStore`] trait keeps the
//! backing injectable: [`MemoryStore`] for tests and embedding hosts,
//! [`FileStore`] for a YAML map file on disk.
//!
//! There is no coordination between concurrent writers; the last write
//! wins. Storage failures surface as [`StoreError`] and propagate to the
//! caller.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The single key this crate reads and writes.
pub const DARK_MODE_KEY: &str = "dark-mode";

/// Error type for preference store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("preference store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a flat string map.
    #[error("preference store is not a flat key/value document: {0}")]
    Format(#[from] serde_yaml::Error),
}

/// Injectable key/value persistence.
///
/// Both the resolver and the applier take a store by reference rather than
/// reaching for ambient global storage, so hosts decide where the
/// preference lives.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store backed by a plain map. Nothing persists.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one YAML map, rewritten on every `set`.
///
/// The file is created lazily on first write (missing parent directories
/// included), so opening a store at a path that does not exist yet is fine
/// and reads as empty.
///
/// ```rust,no_run
/// use nightswitch::{FileStore, PreferenceStore, DARK_MODE_KEY};
///
/// let mut store = FileStore::open("~/.config/nightswitch/preferences.yaml")?;
/// store.set(DARK_MODE_KEY, "true")?;
/// # Ok::<(), nightswitch::StoreError>(())
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing entries if the file is
    /// already there.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_yaml::from_str(&raw)?
            }
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    /// The path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_yaml::to_string(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .insert(key.to_string(), value.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert!(store.get(DARK_MODE_KEY).unwrap().is_none());

        store.set(DARK_MODE_KEY, "true").unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

        store.set(DARK_MODE_KEY, "false").unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("prefs.yaml")).unwrap();
        assert!(store.get(DARK_MODE_KEY).unwrap().is_none());
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");

        let mut store = FileStore::open(&path).unwrap();
        store.set(DARK_MODE_KEY, "true").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(DARK_MODE_KEY).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.yaml");

        let mut store = FileStore::open(&path).unwrap();
        store.set(DARK_MODE_KEY, "false").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_store_preserves_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        fs::write(&path, "dark-mode: 'true'\nother-setting: keep-me\n").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        store.set(DARK_MODE_KEY, "false").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("other-setting").unwrap().as_deref(),
            Some("keep-me")
        );
    }

    #[test]
    fn file_store_rejects_non_map_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        fs::write(&path, "- just\n- a\n- list\n").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Format(_)));
    }
}
