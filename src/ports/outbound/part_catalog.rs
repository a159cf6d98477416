use crate::rollup::domain::{BomEdge, PartId, PartRecord};
use crate::shared::Result;

/// PartCatalog port for the BoM data source
///
/// This port abstracts the external service (e.g., the BoM HTTP API)
/// that supplies the assembly edges and the display number of each part.
///
/// Calls are blocking; the roll-up waits on each one before moving on.
pub trait PartCatalog {
    /// Fetches the complete, flat list of BoM edges
    ///
    /// # Returns
    /// Every edge of the assembly; an empty list when the source has no data
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The source answers with a non-success status
    /// - The response cannot be parsed
    fn fetch_bill_of_materials(&self) -> Result<Vec<BomEdge>>;

    /// Resolves an internal part id to its catalog record
    ///
    /// # Arguments
    /// * `part_id` - Internal identifier of the part
    ///
    /// # Returns
    /// The record; its `part_number` may be absent, see `PartRecord::display_number`
    fn resolve_part_number(&self, part_id: PartId) -> Result<PartRecord>;
}

impl<T: PartCatalog + ?Sized> PartCatalog for &T {
    fn fetch_bill_of_materials(&self) -> Result<Vec<BomEdge>> {
        (**self).fetch_bill_of_materials()
    }

    fn resolve_part_number(&self, part_id: PartId) -> Result<PartRecord> {
        (**self).resolve_part_number(part_id)
    }
}

impl<T: PartCatalog + ?Sized> PartCatalog for Box<T> {
    fn fetch_bill_of_materials(&self) -> Result<Vec<BomEdge>> {
        (**self).fetch_bill_of_materials()
    }

    fn resolve_part_number(&self, part_id: PartId) -> Result<PartRecord> {
        (**self).resolve_part_number(part_id)
    }
}
