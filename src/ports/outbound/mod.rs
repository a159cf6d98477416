/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (BoM API, report files, console).
pub mod part_catalog;
pub mod progress_reporter;
pub mod report_writer;

pub use part_catalog::PartCatalog;
pub use progress_reporter::ProgressReporter;
pub use report_writer::ReportWriter;
