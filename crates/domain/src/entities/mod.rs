//! Domain entities

mod collection_entry;
mod creature;
mod creature_detail;
mod trainer;

pub use collection_entry::CollectionEntry;
pub use creature::{Creature, MAX_CATEGORIES};
pub use creature_detail::{BaseStat, CreatureDetail};
pub use trainer::{normalize_trainer_name, TrainerProfile, MAX_TRAINER_NAME_LENGTH};
