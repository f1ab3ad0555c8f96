//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations. The partner store is the only one that owns state worth
//! persisting; the others hold at most what their screen is showing.

pub mod collection_service;
pub mod lookup_service;
pub mod partner_store;
pub mod search_service;

pub use collection_service::{CollectionBrowser, CollectionPage};
pub use lookup_service::{pokemon_list_path, pokemon_path, CreatureLookup};
pub use partner_store::{PartnerSnapshot, PartnerStore, ResolveOrdering, ResolveOutcome};
pub use search_service::{SearchController, SearchResult};
