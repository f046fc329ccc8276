//! Preference store backends.
//!
//! The host's persistent preferences are modeled as a flat key-value
//! document. Controllers never touch the filesystem or any ambient global
//! state directly; they are handed a [`PreferenceStore`] and read or write
//! whole keys through it, then [`flush`](PreferenceStore::flush) to make
//! the mutation durable.

use std::path::{Path, PathBuf};
use toml::{Table, Value};

use crate::error::ConfigError;

/// A flat key-value preference document.
///
/// Keys map to arbitrary TOML values; the store owns the durable data and
/// callers hold only invocation-scoped copies. Read or write failures are
/// surfaced as [`ConfigError`] and are not handled here.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: Value);

    /// Make pending mutations durable.
    fn flush(&mut self) -> Result<(), ConfigError>;
}

/// A preference document persisted as a TOML file.
///
/// A missing file reads as an empty document; the file (and its parent
/// directory) is created on the first flush that has something to write.
///
/// # Example
///
/// ```rust,no_run
/// use matiz_config::{FileStore, PreferenceStore};
///
/// let mut store = FileStore::open("matiz.toml").unwrap();
/// store.set("current_preset", toml::Value::Integer(2));
/// store.flush().unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: Table,
    dirty: bool,
}

impl FileStore {
    /// Open the document at `path`, reading and parsing it if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();

        let table = if path.is_file() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::read_file(&path, e))?;
            content.parse::<Table>()?
        } else {
            Table::new()
        };

        Ok(Self {
            path,
            table,
            dirty: false,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.table.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.table.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn flush(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(&self.table)?;
        std::fs::write(&self.path, content).map_err(|e| ConfigError::write_file(&self.path, e))?;

        self.dirty = false;
        Ok(())
    }
}

/// An in-memory preference document.
///
/// Useful for tests and for embedding the controller in a host that
/// persists preferences through its own API. `flush` is a no-op.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Table,
}

impl MemoryStore {
    /// Create an empty in-memory document.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.table.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.table.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<(), ConfigError> {
        Ok(())
    }
}
