pub mod http_client;
pub mod messaging;
pub mod platform;

// Re-export messaging types
pub use messaging::EventBus;
