//! Wire-format types for the remote dex.

pub mod dex_responses;

pub use dex_responses::{
    NamedResource, PokemonResponse, ResourceList, SpriteSet, StatSlot, TypeSlot,
};
