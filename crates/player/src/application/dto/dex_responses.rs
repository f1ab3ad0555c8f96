//! Remote dex response DTOs
//!
//! Only the fields the client reads are modelled; everything else in the
//! PokéAPI payload is ignored. Conversions into domain types live here so
//! wire concerns stop at this module.

use serde::Deserialize;

use dexern_domain::{BaseStat, CollectionEntry, Creature, CreatureDetail, DomainError};

// ============================================================================
// /pokemon/{id or name}
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub sprites: SpriteSet,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

/// Sprite URLs; the dex sends `null` for sprites a form doesn't have.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl PokemonResponse {
    /// Category names in the order the dex lists them.
    pub fn categories(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }

    pub fn into_creature(self) -> Result<Creature, DomainError> {
        let categories = self.categories();
        Creature::new(
            self.id,
            self.name,
            self.sprites.front_default.unwrap_or_default(),
            self.sprites.front_shiny.unwrap_or_default(),
            categories,
        )
    }

    pub fn into_detail(self) -> Result<CreatureDetail, DomainError> {
        let height = self.height;
        let weight = self.weight;
        let stats = self
            .stats
            .iter()
            .map(|s| BaseStat::new(s.stat.name.clone(), s.base_stat))
            .collect();
        Ok(CreatureDetail {
            creature: self.into_creature()?,
            height,
            weight,
            stats,
        })
    }

    pub fn into_collection_entry(self) -> CollectionEntry {
        CollectionEntry {
            categories: self.categories(),
            name: self.name,
            front_artwork_url: self.sprites.front_default.unwrap_or_default(),
            back_artwork_url: self.sprites.back_default.unwrap_or_default(),
        }
    }
}

// ============================================================================
// /pokemon?limit=&offset=
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedResource>,
}
