//! Draft persistence backends.
//!
//! The store only depends on the narrow [`DraftPersistence`] key/value pair,
//! so tests inject an in-memory map while the product uses a JSON file under
//! the OS data directory.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Persistence-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("draft storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("draft blob is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend failed: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Narrow key/value seam the draft store persists through.
///
/// Implementations hold opaque serialized blobs; they never interpret them.
pub trait DraftPersistence {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError>;
    fn clear(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and previews.
///
/// Clones share the same map, so a "page reload" is simulated by building a
/// fresh store over a clone of the backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistence {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftPersistence for InMemoryPersistence {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self
            .inner
            .lock()
            .map_err(|_| StoreError::backend("in-memory store lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| StoreError::backend("in-memory store lock poisoned"))?;
        map.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| StoreError::backend("in-memory store lock poisoned"))?;
        map.remove(key);
        Ok(())
    }
}

/// File-backed backend: one `{key}.json` blob per key under a base directory.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend rooted at `{os_data_dir}/stagelink`.
    pub fn at_default_location() -> Result<Self, StoreError> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .ok_or_else(|| StoreError::backend("failed to resolve OS app data directory"))?;

        Ok(Self::new(base.join("stagelink")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl DraftPersistence for FilePersistence {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.blob_path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.blob_path(key), blob)?;
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.blob_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_clones_share_contents() {
        let a = InMemoryPersistence::new();
        let b = a.clone();
        a.save("draft", "{}").unwrap();
        assert_eq!(b.load("draft").unwrap().as_deref(), Some("{}"));

        b.clear("draft").unwrap();
        assert_eq!(a.load("draft").unwrap(), None);
    }

    #[test]
    fn file_backend_round_trips_and_clears() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FilePersistence::new(tmp.path().join("stagelink"));

        assert_eq!(backend.load("draft").unwrap(), None);

        backend.save("draft", r#"{"accountKind":"unset"}"#).unwrap();
        assert_eq!(
            backend.load("draft").unwrap().as_deref(),
            Some(r#"{"accountKind":"unset"}"#)
        );

        backend.clear("draft").unwrap();
        assert_eq!(backend.load("draft").unwrap(), None);
        // Clearing an already-absent key is fine.
        backend.clear("draft").unwrap();
    }
}
