//! Platform-specific implementations
//!
//! Storage adapters for the `StorageProvider` port.

mod desktop;
mod memory;

pub use desktop::DesktopStorageProvider;
pub use memory::InMemoryStorageProvider;
