use crate::application::dto::{RollupRequest, RollupResponse};
use crate::ports::inbound::RollupPort;
use crate::ports::outbound::{PartCatalog, ProgressReporter, ReportWriter};
use crate::rollup::domain::{BomEdge, PartId, PartNumber, PartsByParent, RequiredQuantities};
use crate::rollup::services::{BomIndexer, RollupCalculator};
use crate::shared::Result;
use tracing::{debug, info, warn};

/// RollUpUseCase - Core use case for the BoM quantity roll-up
///
/// This use case orchestrates one run using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `C` - PartCatalog implementation
/// * `W` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct RollUpUseCase<C, W, PR> {
    part_catalog: C,
    report_writer: W,
    progress_reporter: PR,
}

impl<C, W, PR> RollUpUseCase<C, W, PR>
where
    C: PartCatalog,
    W: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new RollUpUseCase with injected dependencies
    pub fn new(part_catalog: C, report_writer: W, progress_reporter: PR) -> Self {
        Self {
            part_catalog,
            report_writer,
            progress_reporter,
        }
    }

    /// Executes the roll-up use case
    ///
    /// # Arguments
    /// * `request` - Roll-up request containing the report destination
    ///
    /// # Returns
    /// RollupResponse with the computed totals. When the BoM is empty the
    /// response is empty and no report is written.
    pub fn execute(&self, request: RollupRequest) -> Result<RollupResponse> {
        // Step 1: Fetch the flat edge list
        let edges = self.fetch_edges()?;

        if edges.is_empty() {
            warn!("No data returned from BoM, nothing to roll up");
            self.progress_reporter
                .report_error("⚠️  Warning: No data returned from BoM API. No report written.");
            return Ok(RollupResponse::empty());
        }

        // Step 2: Index by parent
        let index = BomIndexer::group_by_parent(&edges);
        debug!(
            parents = index.parent_count(),
            edges = index.edge_count(),
            "Indexed bill of materials"
        );

        // Step 3: Multiply and accumulate from the root
        let required = self.calculate(&index)?;

        // Step 4: Persist
        self.write(&required, &request)?;

        Ok(RollupResponse::new(required, edges.len(), true))
    }

    fn fetch_edges(&self) -> Result<Vec<BomEdge>> {
        self.progress_reporter
            .report("📖 Fetching bill of materials from BoM API...");

        let edges = self.part_catalog.fetch_bill_of_materials()?;

        info!(edges = edges.len(), "Fetched bill of materials");
        self.progress_reporter
            .report(&format!("✅ Fetched {} BoM edge(s)", edges.len()));

        Ok(edges)
    }

    fn calculate(&self, index: &PartsByParent) -> Result<RequiredQuantities> {
        self.progress_reporter
            .report("🔍 Calculating required quantities...");

        let total = index.edge_count();
        let mut walked = 0;
        let mut resolve = |part_id: PartId| -> Result<PartNumber> {
            let record = self.part_catalog.resolve_part_number(part_id)?;
            let part_number = record.display_number();

            // Shared subassemblies are walked once per occurrence, so visits can exceed edges
            walked += 1;
            self.progress_reporter.report_progress(
                walked.min(total),
                total,
                Some(&format!("Resolved part {}", part_id)),
            );

            Ok(part_number)
        };

        let required = RollupCalculator::roll_up(index, &mut resolve).map_err(|e| {
            self.progress_reporter
                .report_error("❌ Roll-up stopped before all parts were resolved");
            e
        })?;

        info!(
            parts = required.len(),
            total_quantity = required.total_quantity(),
            "Calculated required quantities"
        );

        Ok(required)
    }

    fn write(&self, required: &RequiredQuantities, request: &RollupRequest) -> Result<()> {
        self.report_writer
            .write_report(required, &request.output_path)?;

        info!(path = %request.output_path.display(), rows = required.len(), "Report written");
        self.progress_reporter.report_completion(&format!(
            "✅ Report complete: {} ({} part number(s))",
            request.output_path.display(),
            required.len()
        ));

        Ok(())
    }
}

impl<C, W, PR> RollupPort for RollUpUseCase<C, W, PR>
where
    C: PartCatalog,
    W: ReportWriter,
    PR: ProgressReporter,
{
    fn run(&self, request: RollupRequest) -> Result<RollupResponse> {
        self.execute(request)
    }
}
