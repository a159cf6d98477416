//! bom-rollup - Bill of materials quantity roll-up
//!
//! This library computes, for a hierarchical bill of materials, the total
//! quantity of every part required to build one unit of the top-level
//! assembly, and writes the result as a two-column report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`rollup`): Part model, parent index and the roll-up traversal
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_rollup::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let part_catalog = CachingPartCatalog::new(BomApiClient::new()?);
//! let report_writer = XlsxReportWriter::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RollUpUseCase::new(part_catalog, report_writer, progress_reporter);
//!
//! // Execute
//! let response = use_case.execute(RollupRequest::new("roll_up_output.xlsx"))?;
//! for (part_number, quantity) in response.required_quantities.iter() {
//!     println!("{}: {}", part_number, quantity);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod logging;
pub mod ports;
pub mod rollup;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{CsvReportWriter, XlsxReportWriter};
    pub use crate::adapters::outbound::network::{BomApiClient, CachingPartCatalog};
    pub use crate::application::dto::{ReportFormat, RollupRequest, RollupResponse};
    pub use crate::application::factories::ReportWriterFactory;
    pub use crate::application::use_cases::RollUpUseCase;
    pub use crate::ports::inbound::RollupPort;
    pub use crate::ports::outbound::{PartCatalog, ProgressReporter, ReportWriter};
    pub use crate::rollup::domain::{
        BomEdge, ChildPart, ParentKey, PartId, PartNumber, PartRecord, PartsByParent,
        RequiredQuantities,
    };
    pub use crate::rollup::services::{BomIndexer, RollupCalculator};
    pub use crate::shared::error::RollupError;
    pub use crate::shared::Result;
}
