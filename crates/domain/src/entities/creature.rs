//! Creature entity - one fetched species record.
//!
//! A `Creature` is produced fresh from every successful lookup and is never
//! patched afterwards; replacing the partner means replacing the whole value.
//! The serialized form doubles as the persisted partner record, so the serde
//! shape here is a storage contract.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum number of categories (elemental types) a creature can carry.
pub const MAX_CATEGORIES: usize = 2;

/// A species record resolved from the remote dex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CreatureRecord")]
pub struct Creature {
    external_id: u32,
    name: String,
    primary_artwork_url: String,
    shiny_artwork_url: String,
    categories: Vec<String>,
}

/// Unchecked wire shape; every path into `Creature` goes through `Creature::new`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatureRecord {
    external_id: u32,
    name: String,
    #[serde(default)]
    primary_artwork_url: String,
    #[serde(default)]
    shiny_artwork_url: String,
    categories: Vec<String>,
}

impl TryFrom<CreatureRecord> for Creature {
    type Error = DomainError;

    fn try_from(record: CreatureRecord) -> Result<Self, Self::Error> {
        Creature::new(
            record.external_id,
            record.name,
            record.primary_artwork_url,
            record.shiny_artwork_url,
            record.categories,
        )
    }
}

impl Creature {
    /// Create a validated creature.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - `external_id` is zero
    /// - the name is empty after trimming
    /// - `categories` is empty, has more than two entries, or contains a blank entry
    pub fn new(
        external_id: u32,
        name: impl Into<String>,
        primary_artwork_url: impl Into<String>,
        shiny_artwork_url: impl Into<String>,
        categories: Vec<String>,
    ) -> Result<Self, DomainError> {
        if external_id == 0 {
            return Err(DomainError::validation("Creature id must be positive"));
        }

        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Creature name cannot be empty"));
        }

        if categories.is_empty() {
            return Err(DomainError::validation(
                "Creature must have at least one category",
            ));
        }
        if categories.len() > MAX_CATEGORIES {
            return Err(DomainError::validation(format!(
                "Creature cannot have more than {} categories, got {}",
                MAX_CATEGORIES,
                categories.len()
            )));
        }
        if categories.iter().any(|c| c.trim().is_empty()) {
            return Err(DomainError::validation("Creature category cannot be blank"));
        }

        Ok(Self {
            external_id,
            name: name.to_string(),
            primary_artwork_url: primary_artwork_url.into(),
            shiny_artwork_url: shiny_artwork_url.into(),
            categories,
        })
    }

    pub fn external_id(&self) -> u32 {
        self.external_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_artwork_url(&self) -> &str {
        &self.primary_artwork_url
    }

    pub fn shiny_artwork_url(&self) -> &str {
        &self.shiny_artwork_url
    }

    /// Categories in the order the remote dex lists them (primary first).
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Artwork to display given the shiny preference.
    ///
    /// Falls back to the regular artwork when the species has no shiny sprite.
    pub fn artwork_url(&self, shiny: bool) -> &str {
        if shiny && !self.shiny_artwork_url.is_empty() {
            &self.shiny_artwork_url
        } else {
            &self.primary_artwork_url
        }
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
