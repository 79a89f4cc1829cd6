use tracing::{debug, info};

use crate::services::store::DocumentStore;
use crate::types::{SeedError, SeedResult};

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearReport {
    pub deleted: usize,
    /// Fetch round-trips, including the final short (possibly empty) page.
    pub rounds: usize,
}

/// Empties a collection page by page using only a bounded fetch.
pub struct CollectionClearer<'a, S: DocumentStore> {
    store: &'a mut S,
    page_size: usize,
}

impl<'a, S: DocumentStore> CollectionClearer<'a, S> {
    pub fn new(store: &'a mut S, page_size: usize) -> SeedResult<Self> {
        if page_size == 0 {
            return Err(SeedError::InvalidPageSize);
        }

        Ok(Self { store, page_size })
    }

    pub fn with_default_page_size(store: &'a mut S) -> Self {
        Self { store, page_size: DEFAULT_PAGE_SIZE }
    }

    /// Keeps fetching and deleting until a page comes back short. A full page
    /// never proves there is more data, so it is always followed by another fetch.
    pub fn clear(&mut self, collection: &str) -> SeedResult<ClearReport> {
        let mut report = ClearReport::default();

        loop {
            let page = self.store.fetch_page(collection, self.page_size)?;
            report.rounds += 1;

            let mut deleted = 0;
            for doc in &page {
                self.store.delete(doc)?;
                deleted += 1;
                debug!("Deleted document {} from collection {}", doc.id, collection);
            }
            report.deleted += deleted;

            if deleted < self.page_size {
                break;
            }
        }

        info!("Collection {collection} cleared ({} documents deleted)", report.deleted);
        Ok(report)
    }
}
