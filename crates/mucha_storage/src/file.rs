//! Filesystem-backed key-value store.

use crate::KeyValueStore;
use mucha_error::{MuchaResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Key-value store persisting each key as a file under a base directory.
///
/// Values are written to a temp file and renamed into place, so a crashed
/// write never leaves a half-written value behind. Concurrent writers are
/// last-writer-wins, matching the browser-local-storage semantics this
/// store replaces.
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a filesystem store rooted at a directory.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> MuchaResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened file store");
        Ok(Self { base_path })
    }

    /// Resolve a key to its backing file path.
    ///
    /// Keys are flat names; anything that would escape the base directory
    /// is rejected.
    fn path_for(&self, key: &str) -> MuchaResult<PathBuf> {
        if key.is_empty()
            || key.contains(std::path::MAIN_SEPARATOR)
            || key.contains('/')
            || key.contains("..")
        {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into());
        }
        Ok(self.base_path.join(key))
    }

    /// The directory this store writes into.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> MuchaResult<Option<String>> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::ValueRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, value), fields(value_len = value.len()))]
    async fn put(&self, key: &str, value: &str) -> MuchaResult<()> {
        let path = self.path_for(key)?;

        // Write to temp file first, then rename for atomicity. The temp
        // name appends rather than swaps the extension so dotted keys like
        // `mucha.profiles` keep distinct temp paths.
        let temp_path = self.base_path.join(format!("{}.tmp", key));
        tokio::fs::write(&temp_path, value).await.map_err(|e| {
            StorageError::new(StorageErrorKind::ValueWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::ValueWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(key, path = %path.display(), "Stored value");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: &str) -> MuchaResult<()> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::ValueWrite(format!(
                "delete {}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }
}
