//! In-process messaging.
//!
//! - `EventBus`: push-based change notifications from `PartnerStore` to the
//!   controllers that render partner state.

pub mod event_bus;

pub use event_bus::EventBus;
