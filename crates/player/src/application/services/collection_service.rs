//! Collection Browser - paginated, region-scoped species grid.
//!
//! Each load asks the list endpoint for the cursor's whole range, then fetches
//! every entry's detail concurrently. One failed detail fails the page.

use dexern_domain::{CollectionCursor, CollectionEntry, Region};
use futures_util::future::try_join_all;
use tokio::sync::Mutex;

use crate::application::error::LookupError;
use crate::application::services::CreatureLookup;

/// A loaded page of tiles plus the cursor that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPage {
    pub cursor: CollectionCursor,
    pub entries: Vec<CollectionEntry>,
}

impl CollectionPage {
    pub fn has_more(&self) -> bool {
        !self.cursor.is_exhausted()
    }
}

pub struct CollectionBrowser {
    lookup: CreatureLookup,
    cursor: Mutex<CollectionCursor>,
}

impl CollectionBrowser {
    pub fn new(lookup: CreatureLookup, region: Region) -> Self {
        Self {
            lookup,
            cursor: Mutex::new(CollectionCursor::new(region)),
        }
    }

    pub async fn cursor(&self) -> CollectionCursor {
        *self.cursor.lock().await
    }

    /// Fetch every tile covered by `cursor`, in list order.
    pub async fn load(&self, cursor: CollectionCursor) -> Result<CollectionPage, LookupError> {
        tracing::debug!(
            region = %cursor.region(),
            offset = cursor.offset(),
            limit = cursor.limit(),
            "Loading collection"
        );

        let list = self
            .lookup
            .list(cursor.offset(), cursor.limit())
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Collection list request failed"))?;

        let details = list
            .results
            .iter()
            .map(|resource| self.lookup.fetch_url(&resource.url));
        let entries = try_join_all(details)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Collection detail request failed"))?
            .into_iter()
            .map(|response| response.into_collection_entry())
            .collect::<Vec<_>>();

        tracing::debug!(entries = entries.len(), "Collection loaded");
        Ok(CollectionPage { cursor, entries })
    }

    /// Reload at the current cursor.
    pub async fn refresh(&self) -> Result<CollectionPage, LookupError> {
        let cursor = self.cursor().await;
        self.load(cursor).await
    }

    /// Grow the cursor by one page and reload. `None` once the region is exhausted.
    pub async fn load_more(&self) -> Option<Result<CollectionPage, LookupError>> {
        let cursor = {
            let mut cursor = self.cursor.lock().await;
            if !cursor.load_more() {
                return None;
            }
            *cursor
        };
        Some(self.load(cursor).await)
    }

    /// Jump to `region`, back to its first page, and reload.
    pub async fn select_region(&self, region: Region) -> Result<CollectionPage, LookupError> {
        let cursor = {
            let mut cursor = self.cursor.lock().await;
            cursor.select_region(region);
            *cursor
        };
        self.load(cursor).await
    }
}
