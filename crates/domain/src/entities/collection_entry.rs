//! One tile in the collection grid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    pub name: String,
    pub front_artwork_url: String,
    pub back_artwork_url: String,
    pub categories: Vec<String>,
}
