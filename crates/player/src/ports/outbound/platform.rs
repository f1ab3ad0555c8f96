//! Platform abstraction ports
//!
//! Local persistence is the only platform concern the player core needs.
//! Keeping it behind a trait lets the file-backed store and the in-memory
//! store used by tests stand in for each other.

/// Errors from a key-value storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    pub fn read(key: &str, message: impl ToString) -> Self {
        Self::Read {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn write(key: &str, message: impl ToString) -> Self {
        Self::Write {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

/// Persistent key-value storage (file-based or in-memory)
#[async_trait::async_trait]
pub trait StorageProvider: Send + Sync {
    /// Load a string value by key, `Ok(None)` if not found
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Save a string value under the given key, replacing any previous value
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value by key; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key constants
///
/// Only `PartnerStore` reads or writes these.
pub mod storage_keys {
    pub const PARTNER_CREATURE: &str = "partner_creature";
    pub const SHINY_PREFERENCE: &str = "shiny_preference";
    pub const TRAINER_NAME: &str = "trainer_name";
    pub const TRAINER_REGION: &str = "trainer_region";
}
