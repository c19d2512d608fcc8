use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::CatalogSource;
use starmatch_core::{Catalog, Result};

/// Load-once holder of the catalog snapshot.
///
/// The first `get` performs the load; callers racing with it block on
/// the write lock and leave with the one completed snapshot. Callers
/// arriving after completion take only an uncontended read lock. A
/// failed load leaves the store empty, so the next `get` retries the
/// source.
pub struct CatalogStore {
    source: Box<dyn CatalogSource + Send + Sync>,
    snapshot: RwLock<Option<Arc<Catalog>>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(source: impl CatalogSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            snapshot: RwLock::new(None),
        }
    }

    /// The shared snapshot, loading it on first use.
    pub fn get(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.snapshot.read().as_ref() {
            return Ok(catalog.clone());
        }

        let mut slot = self.snapshot.write();
        // Another caller may have finished the load while we waited.
        if let Some(catalog) = slot.as_ref() {
            return Ok(catalog.clone());
        }

        let catalog = Arc::new(self.source.load()?);
        *slot = Some(catalog.clone());
        Ok(catalog)
    }

    /// Whether a snapshot is currently held.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().is_some()
    }

    /// Drop the snapshot; the next `get` re-reads the source.
    pub fn invalidate(&self) {
        debug!("catalog snapshot invalidated");
        *self.snapshot.write() = None;
    }
}
