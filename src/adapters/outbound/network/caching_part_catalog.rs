use crate::ports::outbound::PartCatalog;
use crate::rollup::domain::{BomEdge, PartId, PartRecord};
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::trace;

/// CachingPartCatalog wraps a PartCatalog and memoizes part lookups for one run.
///
/// This adapter implements the decorator pattern: a part that occurs in
/// several subassemblies is resolved upstream only once. Totals are the same
/// with or without the cache. The BoM fetch itself is passed through.
///
/// The cache uses interior mutability and is meant for the single-threaded
/// roll-up; it is not `Sync`.
pub struct CachingPartCatalog<C: PartCatalog> {
    inner: C,
    cache: RefCell<HashMap<PartId, PartRecord>>,
}

impl<C: PartCatalog> CachingPartCatalog<C> {
    /// Creates a new caching catalog wrapping the given inner catalog
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the current cache size
    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<C: PartCatalog> PartCatalog for CachingPartCatalog<C> {
    fn fetch_bill_of_materials(&self) -> Result<Vec<BomEdge>> {
        self.inner.fetch_bill_of_materials()
    }

    fn resolve_part_number(&self, part_id: PartId) -> Result<PartRecord> {
        if let Some(cached) = self.cache.borrow().get(&part_id) {
            trace!(%part_id, "Part number cache hit");
            return Ok(cached.clone());
        }

        let record = self.inner.resolve_part_number(part_id)?;
        self.cache.borrow_mut().insert(part_id, record.clone());

        Ok(record)
    }
}
