//! Dexern domain types.
//!
//! Pure values and their invariants: no I/O, no async, no logging.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    normalize_trainer_name, BaseStat, CollectionEntry, Creature, CreatureDetail, TrainerProfile,
    MAX_CATEGORIES, MAX_TRAINER_NAME_LENGTH,
};
pub use error::DomainError;
pub use value_objects::{CollectionCursor, LookupIdentifier, Region, NATIONAL_DEX_SIZE, PAGE_SIZE};
