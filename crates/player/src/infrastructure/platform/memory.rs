//! In-memory storage provider
//!
//! Used by tests and ephemeral sessions. Clones share the same map, so a
//! clone handed to a second `PartnerStore` behaves like a restart over the
//! same disk. Reads and writes can be made to fail on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::outbound::{StorageError, StorageProvider};

#[derive(Clone, Default)]
pub struct InMemoryStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `load` fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `save`/`remove` fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw value under a key, bypassing failure injection.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().await.get(key).cloned()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.lock().await.is_empty()
    }
}

#[async_trait]
impl StorageProvider for InMemoryStorageProvider {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::read(key, "injected read failure"));
        }
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::write(key, "injected write failure"));
        }
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::write(key, "injected write failure"));
        }
        self.values.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_values() {
        let storage = InMemoryStorageProvider::new();
        let other = storage.clone();
        storage.save("k", "v").await.unwrap();
        assert_eq!(other.load("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn injected_failures() {
        let storage = InMemoryStorageProvider::new();
        storage.save("k", "v").await.unwrap();

        storage.set_fail_writes(true);
        assert!(storage.save("k", "w").await.is_err());
        assert!(storage.remove("k").await.is_err());
        assert_eq!(storage.raw("k").await.as_deref(), Some("v"));

        storage.set_fail_reads(true);
        assert!(matches!(
            storage.load("k").await,
            Err(StorageError::Read { .. })
        ));
    }
}
