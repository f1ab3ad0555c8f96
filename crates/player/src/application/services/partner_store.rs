//! Partner Store - single owner of the partner creature and its preferences
//!
//! Resolves identifiers to creatures, keeps the chosen one in memory, and
//! mirrors it (plus the shiny flag and the trainer profile) into local
//! storage so it survives restarts. Every screen that shows or changes the
//! partner goes through this type; nothing else touches the storage keys.
//!
//! Storage failures never surface to callers. A failed write is logged and
//! the in-memory state keeps the new value; a failed or corrupt read is
//! logged and treated as "nothing saved".

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dexern_domain::{Creature, DomainError, LookupIdentifier, Region, TrainerProfile};
use tokio::sync::RwLock;

use crate::application::error::LookupError;
use crate::application::services::CreatureLookup;
use crate::infrastructure::EventBus;
use crate::ports::outbound::{storage_keys, PartnerEvent, StorageProvider};

/// Which completion wins when resolutions overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveOrdering {
    /// Only the most recently requested resolution may be applied; older
    /// ones that finish late are dropped.
    #[default]
    LatestRequest,
    /// Every successful resolution is applied in the order it finishes.
    LastCompleted,
}

impl ResolveOrdering {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LatestRequest => "latest-request",
            Self::LastCompleted => "last-completed",
        }
    }
}

impl FromStr for ResolveOrdering {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest-request" | "latest_request" | "latest" => Ok(Self::LatestRequest),
            "last-completed" | "last_completed" | "completed" => Ok(Self::LastCompleted),
            other => Err(DomainError::parse(format!(
                "Unknown resolve ordering: {}",
                other
            ))),
        }
    }
}

/// Result of a `resolve` call that didn't fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveOutcome {
    /// The identifier was blank; no request was made.
    EmptyIdentifier,
    /// The creature is now the partner and has been persisted.
    Applied(Creature),
    /// The lookup succeeded but a newer request already landed.
    Superseded(Creature),
}

impl ResolveOutcome {
    pub fn applied(&self) -> Option<&Creature> {
        match self {
            Self::Applied(creature) => Some(creature),
            _ => None,
        }
    }
}

/// Point-in-time copy of everything the partner screen renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerSnapshot {
    pub partner: Option<Creature>,
    pub shiny: bool,
    pub trainer: TrainerProfile,
}

#[derive(Default)]
struct PartnerState {
    current: Option<Creature>,
    shiny: bool,
    trainer: TrainerProfile,
    /// Highest sequence number whose mutation has been applied.
    applied_seq: u64,
    revisions: Revisions,
}

/// Per-field change counters. A load only writes a field back into memory
/// if nothing changed that field while its storage reads were in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Revisions {
    partner: u64,
    shiny: u64,
    trainer: u64,
}

pub struct PartnerStore {
    lookup: CreatureLookup,
    storage: Arc<dyn StorageProvider>,
    events: EventBus,
    ordering: ResolveOrdering,
    next_seq: AtomicU64,
    state: RwLock<PartnerState>,
}

impl PartnerStore {
    pub fn new(
        lookup: CreatureLookup,
        storage: Arc<dyn StorageProvider>,
        events: EventBus,
        ordering: ResolveOrdering,
    ) -> Self {
        Self {
            lookup,
            storage,
            events,
            ordering,
            next_seq: AtomicU64::new(0),
            state: RwLock::new(PartnerState::default()),
        }
    }

    /// Register a change listener.
    ///
    /// Events are delivered in the order the changes were applied. Callbacks
    /// run while the store is locked, so they must not block on it.
    pub async fn subscribe(&self, callback: impl FnMut(PartnerEvent) + Send + 'static) {
        self.events.subscribe(callback).await;
    }

    // -------------------------------------------------------------------------
    // Partner
    // -------------------------------------------------------------------------

    /// Resolve free-text input to a creature and make it the partner.
    ///
    /// Blank input is a no-op. On failure the current partner is untouched
    /// and the error is returned for the caller to show; nothing is retried.
    pub async fn resolve(&self, input: &str) -> Result<ResolveOutcome, LookupError> {
        let Some(identifier) = LookupIdentifier::parse(input) else {
            tracing::debug!("Ignoring blank partner identifier");
            return Ok(ResolveOutcome::EmptyIdentifier);
        };

        let seq = self.take_seq();
        tracing::debug!(identifier = %identifier, seq, "Resolving partner");

        let creature = match self.lookup.lookup(&identifier).await {
            Ok(creature) => creature,
            Err(e) => {
                tracing::warn!(identifier = %identifier, seq, error = %e, "Partner lookup failed");
                return Err(e);
            }
        };

        if !self.apply_partner(seq, Some(creature.clone())).await {
            tracing::debug!(
                identifier = %identifier,
                seq,
                "Discarding partner lookup superseded by a newer request"
            );
            return Ok(ResolveOutcome::Superseded(creature));
        }

        tracing::info!(
            name = creature.name(),
            external_id = creature.external_id(),
            "Partner resolved"
        );
        Ok(ResolveOutcome::Applied(creature))
    }

    /// Make an already-fetched creature the partner.
    pub async fn adopt(&self, creature: Creature) {
        let seq = self.take_seq();
        tracing::info!(name = creature.name(), "Adopting partner");
        self.apply_partner(seq, Some(creature)).await;
    }

    /// Forget the partner, in memory and on disk. The shiny flag is kept.
    pub async fn clear_partner(&self) {
        let seq = self.take_seq();
        tracing::info!("Clearing partner");
        self.apply_partner(seq, None).await;
    }

    /// Write the current partner to storage, replacing any saved record.
    ///
    /// Runs automatically whenever the partner changes.
    pub async fn persist_current(&self) {
        let state = self.state.read().await;
        self.write_partner(state.current.as_ref()).await;
    }

    pub async fn current(&self) -> Option<Creature> {
        self.state.read().await.current.clone()
    }

    /// Whether `name` is the current partner (case-insensitive).
    pub async fn is_partner(&self, name: &str) -> bool {
        self.state
            .read()
            .await
            .current
            .as_ref()
            .is_some_and(|c| c.is_named(name))
    }

    pub async fn snapshot(&self) -> PartnerSnapshot {
        let state = self.state.read().await;
        PartnerSnapshot {
            partner: state.current.clone(),
            shiny: state.shiny,
            trainer: state.trainer.clone(),
        }
    }

    /// Restore everything saved by a previous session.
    ///
    /// Keys that are absent (or unreadable) leave the matching in-memory value
    /// as it is, which on a fresh start means "no partner chosen yet". A field
    /// changed while the reads were in flight keeps its newer value.
    pub async fn load_saved_partner(&self) -> PartnerSnapshot {
        let started = self.revisions().await;
        let saved_partner = self.read_partner().await;
        let saved_shiny = self.read_key(storage_keys::SHINY_PREFERENCE).await;
        let saved_trainer = self.read_trainer().await;

        let mut state = self.state.write().await;
        if let Some(creature) = saved_partner {
            if state.revisions.partner == started.partner {
                state.current = Some(creature);
            } else {
                tracing::debug!("Partner changed during load, keeping the newer value");
            }
        }
        if let Some(raw) = saved_shiny {
            if state.revisions.shiny == started.shiny {
                state.shiny = parse_flag(&raw);
            }
        }
        if state.revisions.trainer == started.trainer {
            state.trainer = saved_trainer.apply(state.trainer.clone());
        }
        let snapshot = PartnerSnapshot {
            partner: state.current.clone(),
            shiny: state.shiny,
            trainer: state.trainer.clone(),
        };

        tracing::debug!(
            partner = snapshot.partner.as_ref().map(Creature::name),
            shiny = snapshot.shiny,
            "Loaded saved partner"
        );

        self.events
            .dispatch(PartnerEvent::PartnerChanged(snapshot.partner.clone()))
            .await;
        self.events
            .dispatch(PartnerEvent::ShinyChanged(snapshot.shiny))
            .await;
        self.events
            .dispatch(PartnerEvent::TrainerChanged(snapshot.trainer.clone()))
            .await;
        snapshot
    }

    // -------------------------------------------------------------------------
    // Shiny preference
    // -------------------------------------------------------------------------

    pub async fn shiny(&self) -> bool {
        self.state.read().await.shiny
    }

    /// Set and persist the shiny flag. Independent of whether a partner exists.
    pub async fn set_shiny_preference(&self, value: bool) {
        let mut state = self.state.write().await;
        state.shiny = value;
        state.revisions.shiny += 1;
        self.write_key(storage_keys::SHINY_PREFERENCE, flag_str(value))
            .await;
        self.events.dispatch(PartnerEvent::ShinyChanged(value)).await;
    }

    /// Read the saved shiny flag into memory. Missing or garbled reads as `false`.
    pub async fn load_shiny_preference(&self) -> bool {
        let started = self.revisions().await;
        let value = self
            .read_key(storage_keys::SHINY_PREFERENCE)
            .await
            .is_some_and(|raw| parse_flag(&raw));
        let mut state = self.state.write().await;
        if state.revisions.shiny == started.shiny {
            state.shiny = value;
        }
        state.shiny
    }

    // -------------------------------------------------------------------------
    // Trainer profile
    // -------------------------------------------------------------------------

    pub async fn trainer(&self) -> TrainerProfile {
        self.state.read().await.trainer.clone()
    }

    /// Read the saved trainer profile into memory.
    pub async fn load_trainer(&self) -> TrainerProfile {
        let started = self.revisions().await;
        let saved = self.read_trainer().await;
        let mut state = self.state.write().await;
        if state.revisions.trainer == started.trainer {
            state.trainer = saved.apply(state.trainer.clone());
        }
        state.trainer.clone()
    }

    pub async fn set_trainer_name(&self, name: &str) -> TrainerProfile {
        let mut state = self.state.write().await;
        state.trainer = state.trainer.clone().with_name(name);
        state.revisions.trainer += 1;
        self.write_key(storage_keys::TRAINER_NAME, state.trainer.name())
            .await;
        self.events
            .dispatch(PartnerEvent::TrainerChanged(state.trainer.clone()))
            .await;
        state.trainer.clone()
    }

    pub async fn set_trainer_region(&self, region: Region) -> TrainerProfile {
        let mut state = self.state.write().await;
        state.trainer = state.trainer.clone().with_region(region);
        state.revisions.trainer += 1;
        self.write_key(storage_keys::TRAINER_REGION, region.as_str())
            .await;
        self.events
            .dispatch(PartnerEvent::TrainerChanged(state.trainer.clone()))
            .await;
        state.trainer.clone()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn take_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn revisions(&self) -> Revisions {
        self.state.read().await.revisions
    }

    /// Apply a partner mutation tagged `seq`, persist it, and notify.
    ///
    /// The write lock is held through the storage write and the dispatch, so
    /// the saved record and the last event always match the last applied
    /// value. Returns `false` if the mutation was stale and dropped.
    async fn apply_partner(&self, seq: u64, partner: Option<Creature>) -> bool {
        let mut state = self.state.write().await;
        if self.ordering == ResolveOrdering::LatestRequest && seq < state.applied_seq {
            return false;
        }
        state.applied_seq = state.applied_seq.max(seq);
        state.revisions.partner += 1;
        state.current = partner.clone();
        self.write_partner(partner.as_ref()).await;
        self.events
            .dispatch(PartnerEvent::PartnerChanged(partner))
            .await;
        true
    }

    async fn write_partner(&self, partner: Option<&Creature>) {
        let key = storage_keys::PARTNER_CREATURE;
        let Some(creature) = partner else {
            if let Err(e) = self.storage.remove(key).await {
                tracing::warn!(key, error = %e, "Failed to remove saved partner");
            }
            return;
        };

        match serde_json::to_string(creature) {
            Ok(json) => self.write_key(key, &json).await,
            Err(e) => tracing::warn!(key, error = %e, "Failed to serialize partner"),
        }
    }

    async fn write_key(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.save(key, value).await {
            tracing::warn!(key, error = %e, "Failed to write to storage");
        }
    }

    async fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.load(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read from storage");
                None
            }
        }
    }

    async fn read_trainer(&self) -> SavedTrainer {
        SavedTrainer {
            name: self.read_key(storage_keys::TRAINER_NAME).await,
            region: self
                .read_key(storage_keys::TRAINER_REGION)
                .await
                .map(|raw| parse_region(&raw)),
        }
    }

    async fn read_partner(&self) -> Option<Creature> {
        let raw = self.read_key(storage_keys::PARTNER_CREATURE).await?;
        match serde_json::from_str::<Creature>(&raw) {
            Ok(creature) => Some(creature),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring corrupt saved partner");
                None
            }
        }
    }
}

/// Trainer fields found in storage; absent keys leave the profile alone.
struct SavedTrainer {
    name: Option<String>,
    region: Option<Region>,
}

impl SavedTrainer {
    fn apply(self, mut profile: TrainerProfile) -> TrainerProfile {
        if let Some(name) = self.name {
            profile = profile.with_name(name);
        }
        if let Some(region) = self.region {
            profile = profile.with_region(region);
        }
        profile
    }
}

fn flag_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn parse_flag(raw: &str) -> bool {
    raw.trim() == "true"
}

fn parse_region(raw: &str) -> Region {
    raw.parse().unwrap_or_else(|e| {
        tracing::warn!(value = raw, error = %e, "Unknown saved trainer region, using default");
        Region::default()
    })
}
