//! Creature Lookup - resolves identifiers against the remote dex
//!
//! A plain async function object: given an identifier, produce a creature.
//! It holds no state, so controllers call it whenever their input changes.

use std::sync::Arc;

use dexern_domain::{Creature, CreatureDetail, LookupIdentifier};
use serde::de::DeserializeOwned;

use crate::application::dto::{PokemonResponse, ResourceList};
use crate::application::error::LookupError;
use crate::ports::outbound::{ApiPath, RawApiPort};

/// Path of the species endpoint for an identifier.
pub fn pokemon_path(identifier: &LookupIdentifier) -> ApiPath {
    ApiPath::new().segment("pokemon").segment(identifier.as_str())
}

/// Path of the paginated species list.
pub fn pokemon_list_path(offset: u32, limit: u32) -> ApiPath {
    ApiPath::new()
        .segment("pokemon")
        .query("limit", limit)
        .query("offset", offset)
}

#[derive(Clone)]
pub struct CreatureLookup {
    api: Arc<dyn RawApiPort>,
}

impl CreatureLookup {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Resolve an identifier to a creature.
    pub async fn lookup(&self, identifier: &LookupIdentifier) -> Result<Creature, LookupError> {
        self.fetch(identifier)
            .await?
            .into_creature()
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))
    }

    /// Resolve an identifier to a creature plus its statistics.
    pub async fn detail(
        &self,
        identifier: &LookupIdentifier,
    ) -> Result<CreatureDetail, LookupError> {
        self.fetch(identifier)
            .await?
            .into_detail()
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))
    }

    /// Fetch a species by the absolute URL a list endpoint handed out.
    pub async fn fetch_url(&self, url: &str) -> Result<PokemonResponse, LookupError> {
        let value = self
            .api
            .get_json_url(url)
            .await
            .map_err(|e| LookupError::from_api(url, e))?;
        decode(value)
    }

    /// One page of the species list.
    pub async fn list(&self, offset: u32, limit: u32) -> Result<ResourceList, LookupError> {
        let path = pokemon_list_path(offset, limit);
        let value = self
            .api
            .get_json(&path)
            .await
            .map_err(|e| LookupError::from_api(&path.to_string(), e))?;
        decode(value)
    }

    async fn fetch(&self, identifier: &LookupIdentifier) -> Result<PokemonResponse, LookupError> {
        let value = self
            .api
            .get_json(&pokemon_path(identifier))
            .await
            .map_err(|e| LookupError::from_api(identifier.as_str(), e))?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, LookupError> {
    serde_json::from_value(value).map_err(|e| LookupError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Canned dex payloads shared by service tests.

    use serde_json::{json, Value};

    pub fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
        let types: Vec<Value> = types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
            .collect();
        json!({
            "id": id,
            "name": name,
            "height": 4,
            "weight": 60,
            "sprites": {
                "front_default": format!("https://img/{}.png", id),
                "front_shiny": format!("https://img/shiny/{}.png", id),
                "back_default": format!("https://img/back/{}.png", id)
            },
            "types": types,
            "stats": [
                { "base_stat": 35, "stat": { "name": "hp", "url": "" } },
                { "base_stat": 90, "stat": { "name": "speed", "url": "" } }
            ]
        })
    }

    pub fn pikachu_json() -> Value {
        pokemon_json(25, "pikachu", &["electric"])
    }

    pub fn charizard_json() -> Value {
        pokemon_json(6, "charizard", &["fire", "flying"])
    }
}
