//! Search screen logic.
//!
//! Looks creatures up without touching the partner, and lets the user make
//! the shown result their partner (or drop it) through the partner store.

use std::sync::Arc;

use dexern_domain::{Creature, LookupIdentifier};
use tokio::sync::Mutex;

use crate::application::error::LookupError;
use crate::application::services::{CreatureLookup, PartnerStore};

/// What the search screen shows after a query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub creature: Creature,
    pub is_partner: bool,
}

pub struct SearchController {
    lookup: CreatureLookup,
    partners: Arc<PartnerStore>,
    result: Mutex<Option<Creature>>,
}

impl SearchController {
    pub fn new(lookup: CreatureLookup, partners: Arc<PartnerStore>) -> Self {
        Self {
            lookup,
            partners,
            result: Mutex::new(None),
        }
    }

    /// Look up `query` and keep it as the shown result.
    ///
    /// A blank query returns `Ok(None)` and leaves the shown result alone.
    /// A failed lookup clears it.
    pub async fn search(&self, query: &str) -> Result<Option<SearchResult>, LookupError> {
        let Some(identifier) = LookupIdentifier::parse(query) else {
            return Ok(None);
        };

        tracing::debug!(query = %identifier, "Searching");
        let creature = match self.lookup.lookup(&identifier).await {
            Ok(creature) => creature,
            Err(e) => {
                tracing::warn!(query = %identifier, error = %e, "Search failed");
                *self.result.lock().await = None;
                return Err(e);
            }
        };

        *self.result.lock().await = Some(creature.clone());
        let is_partner = self.partners.is_partner(creature.name()).await;
        Ok(Some(SearchResult {
            creature,
            is_partner,
        }))
    }

    /// The shown result with its current partner status.
    pub async fn current(&self) -> Option<SearchResult> {
        let creature = self.result.lock().await.clone()?;
        let is_partner = self.partners.is_partner(creature.name()).await;
        Some(SearchResult {
            creature,
            is_partner,
        })
    }

    /// Make the shown result the partner, or clear it if it already is.
    ///
    /// Returns the new partner status, or `None` when nothing is shown.
    pub async fn toggle_partner(&self) -> Option<bool> {
        let creature = self.result.lock().await.clone()?;
        if self.partners.is_partner(creature.name()).await {
            self.partners.clear_partner().await;
            Some(false)
        } else {
            self.partners.adopt(creature).await;
            Some(true)
        }
    }

    pub async fn reset(&self) {
        *self.result.lock().await = None;
    }
}
