//! Runtime configuration from the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::application::services::ResolveOrdering;
use crate::infrastructure::http_client::DEFAULT_API_BASE_URL;

pub const ENV_API_BASE_URL: &str = "DEXERN_API_BASE_URL";
pub const ENV_STORAGE_PATH: &str = "DEXERN_STORAGE_PATH";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "DEXERN_HTTP_TIMEOUT_SECS";
pub const ENV_RESOLVE_ORDERING: &str = "DEXERN_RESOLVE_ORDERING";

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub api_base_url: String,
    /// Override for the storage file; `None` uses the platform config dir.
    pub storage_path: Option<PathBuf>,
    /// Request timeout; `None` waits indefinitely.
    pub http_timeout: Option<Duration>,
    pub resolve_ordering: ResolveOrdering,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_path: None,
            http_timeout: None,
            resolve_ordering: ResolveOrdering::default(),
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset; unparsable
    /// values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let http_timeout = get(ENV_HTTP_TIMEOUT_SECS).and_then(|raw| match raw.parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(e) => {
                tracing::warn!(key = ENV_HTTP_TIMEOUT_SECS, value = %raw, error = %e, "Invalid timeout, using none");
                None
            }
        });

        let resolve_ordering = get(ENV_RESOLVE_ORDERING)
            .map(|raw| {
                raw.parse().unwrap_or_else(|e| {
                    tracing::warn!(key = ENV_RESOLVE_ORDERING, value = %raw, error = %e, "Invalid ordering, using default");
                    defaults.resolve_ordering
                })
            })
            .unwrap_or(defaults.resolve_ordering);

        Self {
            api_base_url: get(ENV_API_BASE_URL).unwrap_or(defaults.api_base_url),
            storage_path: get(ENV_STORAGE_PATH).map(PathBuf::from),
            http_timeout,
            resolve_ordering,
        }
    }
}
