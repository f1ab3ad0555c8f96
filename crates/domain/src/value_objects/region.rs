//! National dex regions and their offsets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Last entry of the national dex.
pub const NATIONAL_DEX_SIZE: u32 = 1025;

/// A contiguous range of the national dex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
    Galar,
    Paldea,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::Kanto,
        Region::Johto,
        Region::Hoenn,
        Region::Sinnoh,
        Region::Unova,
        Region::Kalos,
        Region::Alola,
        Region::Galar,
        Region::Paldea,
    ];

    /// Zero-based national dex offset of the region's first entry.
    pub fn offset(self) -> u32 {
        match self {
            Region::Kanto => 0,
            Region::Johto => 151,
            Region::Hoenn => 251,
            Region::Sinnoh => 386,
            Region::Unova => 493,
            Region::Kalos => 649,
            Region::Alola => 721,
            Region::Galar => 809,
            Region::Paldea => 905,
        }
    }

    /// Number of entries in the region.
    pub fn size(self) -> u32 {
        self.next().map_or(NATIONAL_DEX_SIZE, Region::offset) - self.offset()
    }

    /// The region that follows this one in dex order.
    pub fn next(self) -> Option<Region> {
        let idx = Self::ALL.iter().position(|r| *r == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Kanto => "Kanto",
            Region::Johto => "Johto",
            Region::Hoenn => "Hoenn",
            Region::Sinnoh => "Sinnoh",
            Region::Unova => "Unova",
            Region::Kalos => "Kalos",
            Region::Alola => "Alola",
            Region::Galar => "Galar",
            Region::Paldea => "Paldea",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::parse(format!("Unknown region: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_cover_the_national_dex() {
        let total: u32 = Region::ALL.iter().map(|r| r.size()).sum();
        assert_eq!(total, NATIONAL_DEX_SIZE);
        assert_eq!(Region::Kanto.size(), 151);
        assert_eq!(Region::Johto.size(), 100);
        assert_eq!(Region::Paldea.size(), 120);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("johto".parse::<Region>().unwrap(), Region::Johto);
        assert_eq!(" PALDEA ".parse::<Region>().unwrap(), Region::Paldea);
        assert!("orre".parse::<Region>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }
}
