use crate::rollup::domain::RequiredQuantities;

/// RollupResponse - Internal response DTO from the roll-up use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupResponse {
    /// Total required quantity per part number, in report row order
    pub required_quantities: RequiredQuantities,
    /// Number of BoM edges fetched from the catalog
    pub edge_count: usize,
    /// False when the BoM was empty and no report file was created
    pub report_written: bool,
}

impl RollupResponse {
    pub fn new(required_quantities: RequiredQuantities, edge_count: usize, report_written: bool) -> Self {
        Self {
            required_quantities,
            edge_count,
            report_written,
        }
    }

    /// Response for a run whose BoM had no edges
    pub fn empty() -> Self {
        Self::new(RequiredQuantities::new(), 0, false)
    }
}
