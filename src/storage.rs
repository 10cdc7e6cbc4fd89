//! Persistence adapter for crew
//!
//! The board is persisted as a single serialized snapshot under one key in a
//! key-value store. The store contract is deliberately small:
//!
//! - `get(key)` returns the stored string, or `None` when nothing was saved
//! - `set(key, value)` overwrites the stored string
//!
//! `FileStore` backs each key with one file under a data directory and
//! writes atomically (temp file + rename) so an interrupted process never
//! leaves a torn snapshot. `MemoryStore` is the in-process double used by
//! tests.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Minimal key-value contract the application persists through.
pub trait KeyValue {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory holding the key files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn key_file(&self, key: &str) -> PathBuf {
        self.root.join(sanitize_key(key))
    }

    /// Write data atomically using temp file + rename.
    ///
    /// Readers never observe a partial write; the file is either fully
    /// written or untouched.
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_file(key);
        if !path.exists() {
            debug!(key, "no stored value");
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_file(key);
        debug!(key, bytes = value.len(), "writing store key");
        self.write_atomic(&path, value.as_bytes())
    }
}

/// In-memory store for unit tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Map a store key to a safe file name.
fn sanitize_key(key: &str) -> String {
    let mut name = String::new();
    for ch in key.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' {
            name.push(ch);
        } else {
            name.push('_');
        }
    }
    if name.is_empty() {
        "_".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert_eq!(store.get("todo-app-v1").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("data"));
        store.set("todo-app-v1", "{\"teammates\":[]}").unwrap();
        assert_eq!(
            store.get("todo-app-v1").unwrap().as_deref(),
            Some("{\"teammates\":[]}")
        );
    }

    #[test]
    fn set_overwrites_previous_value() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn keys_map_to_safe_file_names() {
        assert_eq!(sanitize_key("todo-app-v1"), "todo-app-v1");
        assert_eq!(sanitize_key("a/b c"), "a_b_c");
        assert_eq!(sanitize_key(""), "_");
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
