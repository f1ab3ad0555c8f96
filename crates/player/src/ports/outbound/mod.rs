//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to reach the remote dex and local storage
//! without depending on concrete implementations.

pub mod api_port;
pub mod partner_events;
pub mod platform;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPath};
pub use partner_events::PartnerEvent;
pub use platform::{storage_keys, StorageError, StorageProvider};
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
