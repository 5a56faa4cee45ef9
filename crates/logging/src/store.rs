//! crates/logging/src/store.rs
//! Persistence hook for the active pattern string.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Failure reported by a [`PatternStore`].
///
/// The registry never propagates these to callers of
/// [`Registry::enable`](crate::Registry::enable); they are only traced.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("pattern store I/O on {path}: {source}")]
    Io {
        /// File the store operates on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The backing storage cannot be used at all.
    #[error("pattern store unavailable: {0}")]
    Unavailable(String),
}

/// Loads and saves the raw pattern string across process restarts.
///
/// `save("")` means "nothing enabled" and should clear any stored value.
pub trait PatternStore: Send + Sync {
    /// Persists `namespaces`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the value cannot be stored.
    fn save(&self, namespaces: &str) -> Result<(), StoreError>;

    /// Returns the stored pattern string, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;
}

/// Process-local store, mainly useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `namespaces`.
    #[must_use]
    pub fn with_value(namespaces: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(namespaces.into())),
        }
    }

    /// Returns the current value without going through the trait.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl PatternStore for MemoryStore {
    fn save(&self, namespaces: &str) -> Result<(), StoreError> {
        let mut value = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        *value = (!namespaces.is_empty()).then(|| namespaces.to_owned());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.get())
    }
}

/// Stores the pattern string in a single file.
///
/// Saving an empty string removes the file; a missing file loads as `None`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`. The file is not touched until the
    /// first save or load.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PatternStore for FileStore {
    fn save(&self, namespaces: &str) -> Result<(), StoreError> {
        if namespaces.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(error) if error.kind() != io::ErrorKind::NotFound => Err(self.io_error(error)),
                _ => Ok(()),
            };
        }
        fs::write(&self.path, namespaces).map_err(|error| self.io_error(error))
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(self.io_error(error)),
        }
    }
}

impl fmt::Debug for FileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FileStore").field(&self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.load().expect("memory"), None);

        store.save("a,-b").expect("memory");
        assert_eq!(store.load().expect("memory").as_deref(), Some("a,-b"));

        store.save("").expect("memory");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_store_writes_and_removes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("debug"));

        assert_eq!(store.load().expect("missing file"), None);

        store.save("worker:*").expect("write");
        assert_eq!(fs::read_to_string(store.path()).expect("read"), "worker:*");
        assert_eq!(store.load().expect("read").as_deref(), Some("worker:*"));

        store.save("").expect("remove");
        assert!(!store.path().exists());
        store.save("").expect("removing twice is fine");
    }

    #[test]
    fn file_store_trims_trailing_newline() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("debug");
        fs::write(&path, "a,b\n").expect("write");
        assert_eq!(FileStore::new(path).load().expect("read").as_deref(), Some("a,b"));
    }

    #[test]
    fn file_store_reports_io_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("missing").join("debug"));

        let error = store.save("x").expect_err("parent directory is missing");
        assert!(matches!(error, StoreError::Io { .. }));
        assert!(error.to_string().contains("debug"));
    }
}
