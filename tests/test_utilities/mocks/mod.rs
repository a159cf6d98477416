/// Mock implementations for testing
mod mock_part_catalog;
mod mock_progress_reporter;
mod mock_report_writer;

pub use mock_part_catalog::MockPartCatalog;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_writer::MockReportWriter;
