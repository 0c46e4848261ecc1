//! A `ConfigStore` backed by a TOML file.

use std::path::{Path, PathBuf};

use hotbind_common::ConfigError;

use crate::schema::ConfigDocument;
use crate::store::ConfigStore;
use crate::toml_loader::{default_config_path, load_or_create};
use crate::toml_writer::save_document_to_path;

/// File-backed store.
///
/// Writes land in memory immediately and reach disk on [`flush`](ConfigStore::flush).
/// Flushing a store with no pending writes does not touch the file.
#[derive(Debug)]
pub struct TomlStore {
    path: PathBuf,
    document: ConfigDocument,
    pending: bool,
}

impl TomlStore {
    /// Open the store at `path`, creating a default file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let document = load_or_create(&path)?;
        Ok(Self {
            path,
            document,
            pending: false,
        })
    }

    /// Open the store at the platform default path.
    pub fn open_default() -> Result<Self, ConfigError> {
        Self::open(default_config_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Whether writes are waiting for a flush.
    pub fn has_pending_writes(&self) -> bool {
        self.pending
    }
}

impl ConfigStore for TomlStore {
    fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.document.get_int(section, key)
    }

    fn set_int(&mut self, section: &str, key: &str, value: i64) {
        self.document.set_int(section, key, value);
        self.pending = true;
    }

    fn flush(&mut self) -> Result<(), ConfigError> {
        if !self.pending {
            return Ok(());
        }
        save_document_to_path(&self.document, &self.path)?;
        self.pending = false;
        Ok(())
    }
}
