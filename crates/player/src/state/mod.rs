//! State containers for dependency injection
//!
//! Concrete wiring of adapters into services. Lives outside `ports` because
//! it names real implementations.

mod services;

pub use services::Services;
