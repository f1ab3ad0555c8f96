//! Dexern player crate.
//!
//! Client core of the Pokédex app: the partner store and the screens' data
//! logic, the outbound ports they depend on, and the adapters that implement
//! those ports on desktop.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;

pub use application::error::LookupError;
pub use application::services::{
    CollectionBrowser, CollectionPage, CreatureLookup, PartnerSnapshot, PartnerStore,
    ResolveOrdering, ResolveOutcome, SearchController, SearchResult,
};
pub use config::PlayerConfig;
pub use state::Services;
