use crate::adapters::outbound::filesystem::{CsvReportWriter, XlsxReportWriter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportWriter;

/// Factory for creating report writers
///
/// This factory encapsulates the creation logic for the report writer
/// implementations. It belongs in the application layer as it selects
/// infrastructure adapters based on application needs.
pub struct ReportWriterFactory;

impl ReportWriterFactory {
    /// Creates a writer instance for the specified report format
    ///
    /// # Examples
    /// ```
    /// use bom_rollup::application::dto::ReportFormat;
    /// use bom_rollup::application::factories::ReportWriterFactory;
    ///
    /// let writer = ReportWriterFactory::create(ReportFormat::Csv);
    /// ```
    pub fn create(format: ReportFormat) -> Box<dyn ReportWriter> {
        match format {
            ReportFormat::Xlsx => Box::new(XlsxReportWriter::new()),
            ReportFormat::Csv => Box::new(CsvReportWriter::new()),
        }
    }
}
