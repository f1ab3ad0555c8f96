//! Trainer profile shown on the partner card.

use serde::{Deserialize, Serialize};

use crate::value_objects::Region;

/// Maximum trainer name length kept after trimming.
pub const MAX_TRAINER_NAME_LENGTH: usize = 24;

/// The user's display name and home region.
///
/// An empty name is the "not set yet" state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainerProfile {
    name: String,
    region: Region,
}

impl TrainerProfile {
    pub fn new(name: impl AsRef<str>, region: Region) -> Self {
        Self {
            name: normalize_trainer_name(name.as_ref()),
            region,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.name = normalize_trainer_name(name.as_ref());
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }
}

/// Trim and cut a trainer name to [`MAX_TRAINER_NAME_LENGTH`] characters.
pub fn normalize_trainer_name(name: &str) -> String {
    name.trim().chars().take(MAX_TRAINER_NAME_LENGTH).collect()
}
