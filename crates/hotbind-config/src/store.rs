//! The `ConfigStore` seam and an in-memory implementation.

use hotbind_common::ConfigError;

use crate::schema::ConfigDocument;

/// Persistent key/value store organized into named sections.
///
/// Reads never fail: a missing or non-integer key is `None`. Writes are
/// fire-and-forget from the caller's point of view; a store that persists
/// to disk reports failures from [`flush`](Self::flush).
pub trait ConfigStore {
    fn get_int(&self, section: &str, key: &str) -> Option<i64>;

    fn set_int(&mut self, section: &str, key: &str, value: i64);

    /// Read a 0/1 flag. Missing keys are `false`.
    fn get_bool(&self, section: &str, key: &str) -> bool {
        self.get_int(section, key).is_some_and(|v| v != 0)
    }

    fn set_bool(&mut self, section: &str, key: &str, value: bool) {
        self.set_int(section, key, i64::from(value));
    }

    /// Push pending writes to durable storage.
    fn flush(&mut self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// A store that never touches disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: ConfigDocument,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: ConfigDocument) -> Self {
        Self {
            document,
            writes: 0,
        }
    }

    /// Builder-style seed value.
    pub fn with_int(mut self, section: &str, key: &str, value: i64) -> Self {
        self.document.set_int(section, key, value);
        self
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Number of `set_int` calls since construction.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ConfigStore for MemoryStore {
    fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        self.document.get_int(section, key)
    }

    fn set_int(&mut self, section: &str, key: &str, value: i64) {
        self.writes += 1;
        self.document.set_int(section, key, value);
    }
}
