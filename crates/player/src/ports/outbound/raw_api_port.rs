//! Raw API Port - Object-safe HTTP boundary
//!
//! Returns untyped JSON so the port can live behind `Arc<dyn RawApiPort>`.
//! Typed mapping happens in the application layer (`CreatureLookup`).

use serde_json::Value;

use super::{ApiError, ApiPath};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// GET a path relative to the configured base URL.
    async fn get_json(&self, path: &ApiPath) -> Result<Value, ApiError>;

    /// GET an absolute URL, as handed out by list endpoints.
    async fn get_json_url(&self, url: &str) -> Result<Value, ApiError>;
}
