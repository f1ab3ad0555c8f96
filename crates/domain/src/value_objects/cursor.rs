//! Collection pagination cursor.

use serde::{Deserialize, Serialize};

use super::region::Region;

/// Entries added per "load more" (six rows of three tiles).
pub const PAGE_SIZE: u32 = 18;

/// Offset/limit pair for the collection list, scoped to one region.
///
/// The limit grows by [`PAGE_SIZE`] and never runs past the end of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCursor {
    region: Region,
    limit: u32,
}

impl CollectionCursor {
    /// First page of a region.
    pub fn new(region: Region) -> Self {
        Self {
            region,
            limit: PAGE_SIZE.min(region.size()),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Absolute dex offset to query from.
    pub fn offset(&self) -> u32 {
        self.region.offset()
    }

    /// True once the whole region is covered.
    pub fn is_exhausted(&self) -> bool {
        self.limit >= self.region.size()
    }

    /// Extend by one page. Returns `false` when already at the end of the region.
    pub fn load_more(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.limit = (self.limit + PAGE_SIZE).min(self.region.size());
        true
    }

    /// Switch region, starting over at one page.
    pub fn select_region(&mut self, region: Region) {
        *self = Self::new(region);
    }
}

impl Default for CollectionCursor {
    fn default() -> Self {
        Self::new(Region::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_page() {
        let cursor = CollectionCursor::new(Region::Johto);
        assert_eq!(cursor.offset(), 151);
        assert_eq!(cursor.limit(), PAGE_SIZE);
    }

    #[test]
    fn load_more_clamps_to_region() {
        let mut cursor = CollectionCursor::new(Region::Kanto);
        let mut pages = 1;
        while cursor.load_more() {
            pages += 1;
        }
        assert_eq!(cursor.limit(), 151);
        assert_eq!(pages, 9);
        assert!(cursor.is_exhausted());
        assert!(!cursor.load_more());
    }

    #[test]
    fn select_region_resets_limit() {
        let mut cursor = CollectionCursor::default();
        cursor.load_more();
        cursor.load_more();
        cursor.select_region(Region::Galar);
        assert_eq!(cursor.region(), Region::Galar);
        assert_eq!(cursor.limit(), PAGE_SIZE);
        assert_eq!(cursor.offset(), 809);
    }
}
