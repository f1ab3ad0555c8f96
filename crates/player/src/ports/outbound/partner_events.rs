//! Change notifications published by the partner store.

use dexern_domain::{Creature, TrainerProfile};

/// Emitted after every mutation of partner-owned state.
#[derive(Debug, Clone, PartialEq)]
pub enum PartnerEvent {
    /// The partner was resolved, adopted, restored, or cleared (`None`).
    PartnerChanged(Option<Creature>),
    ShinyChanged(bool),
    TrainerChanged(TrainerProfile),
}
