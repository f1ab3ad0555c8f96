//! Value objects - validated by construction, compared by value.

mod cursor;
mod identifier;
mod region;

pub use cursor::{CollectionCursor, PAGE_SIZE};
pub use identifier::LookupIdentifier;
pub use region::{Region, NATIONAL_DEX_SIZE};
