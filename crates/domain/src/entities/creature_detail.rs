//! Statistics view of a creature.

use serde::{Deserialize, Serialize};

use super::creature::Creature;

/// One base statistic (hp, attack, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

impl BaseStat {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A creature together with the data shown on its statistics page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureDetail {
    pub creature: Creature,
    /// Height in decimetres, as reported by the dex.
    pub height: u32,
    /// Weight in hectograms, as reported by the dex.
    pub weight: u32,
    pub stats: Vec<BaseStat>,
}

impl CreatureDetail {
    /// Sum of all base stats.
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.value).sum()
    }

    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_and_lookup() {
        let detail = CreatureDetail {
            creature: Creature::new(25, "pikachu", "", "", vec!["electric".into()]).unwrap(),
            height: 4,
            weight: 60,
            stats: vec![
                BaseStat::new("hp", 35),
                BaseStat::new("attack", 55),
                BaseStat::new("speed", 90),
            ],
        };
        assert_eq!(detail.base_stat_total(), 180);
        assert_eq!(detail.stat("Speed"), Some(90));
        assert_eq!(detail.stat("defense"), None);
    }
}
