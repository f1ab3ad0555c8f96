//! Desktop platform implementations
//!
//! File-backed key-value storage for native builds.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use directories::ProjectDirs;
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::outbound::{StorageError, StorageProvider};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/dexern/storage.json
/// - macOS: ~/Library/Application Support/io.dexern.dexern/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\dexern\dexern\config\storage.json
///
/// The whole map is rewritten on every change (write to a temp file, then
/// rename), and the in-memory copy only changes once the write succeeded.
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values; the lock also serializes file rewrites
    cache: Mutex<HashMap<String, String>>,
}

impl DesktopStorageProvider {
    /// Platform default location of the storage file.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("io", "dexern", "dexern") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("dexern_storage.json")
        }
    }

    /// Open the storage file at the platform default location.
    pub async fn open_default() -> Self {
        Self::open(Self::default_path()).await
    }

    /// Open (or lazily create) a storage file.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and also treated as empty; it is overwritten on the next save.
    pub async fn open(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = match fs::read_to_string(&storage_path).await {
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = ?storage_path, error = %e, "Failed to parse storage file");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(path = ?storage_path, error = %e, "Failed to read storage file");
                HashMap::new()
            }
        };

        tracing::debug!(path = ?storage_path, keys = cache.len(), "Desktop storage initialized");

        Self {
            storage_path,
            cache: Mutex::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist a full map to disk.
    async fn persist(&self, key: &str, map: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::write(key, e))?;
            }
        }

        let data = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp_path = self.storage_path.with_extension("json.tmp");
        fs::write(&tmp_path, data)
            .await
            .map_err(|e| StorageError::write(key, e))?;
        fs::rename(&tmp_path, &self.storage_path)
            .await
            .map_err(|e| StorageError::write(key, e))?;
        Ok(())
    }
}

#[async_trait]
impl StorageProvider for DesktopStorageProvider {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cache.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.lock().await;
        let mut next = cache.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(key, &next).await?;
        *cache = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.lock().await;
        if !cache.contains_key(key) {
            return Ok(());
        }
        let mut next = cache.clone();
        next.remove(key);
        self.persist(key, &next).await?;
        *cache = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DesktopStorageProvider::open(dir.path().join("storage.json")).await;
        assert_eq!(storage.load("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::open(&path).await;
        storage.save("shiny_preference", "true").await.unwrap();
        storage.save("trainer_name", "Red").await.unwrap();
        storage.remove("trainer_name").await.unwrap();
        drop(storage);

        let reopened = DesktopStorageProvider::open(&path).await;
        assert_eq!(
            reopened.load("shiny_preference").await.unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(reopened.load("trainer_name").await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let storage = DesktopStorageProvider::open(&path).await;
        assert_eq!(storage.load("partner_creature").await.unwrap(), None);

        storage.save("shiny_preference", "false").await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("shiny_preference"));
    }

    #[tokio::test]
    async fn failed_write_leaves_cache_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // Parent "directory" is a regular file, so every write fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let storage = DesktopStorageProvider::open(blocker.join("storage.json")).await;

        let err = storage.save("shiny_preference", "true").await.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(storage.load("shiny_preference").await.unwrap(), None);
    }
}
