use crate::application::dto::{RollupRequest, RollupResponse};
use crate::shared::Result;

/// RollupPort - Inbound port for the BoM roll-up use case
///
/// This port defines the interface that external adapters (CLI, tests, etc.)
/// use to trigger a roll-up. It represents the application's public API.
pub trait RollupPort {
    /// Runs one complete roll-up
    ///
    /// # Arguments
    /// * `request` - Request parameters (whether to persist the report)
    ///
    /// # Returns
    /// The computed quantities and whether a report was written.
    /// An empty bill of materials is a successful run with no report.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The BoM API cannot be reached or answers with a failure status
    /// - An edge is malformed or the assembly contains a cycle
    /// - The report cannot be written
    fn run(&self, request: RollupRequest) -> Result<RollupResponse>;
}
