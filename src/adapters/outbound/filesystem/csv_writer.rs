use crate::ports::outbound::ReportWriter;
use crate::rollup::domain::RequiredQuantities;
use crate::shared::error::RollupError;
use crate::shared::security::validate_output_path;
use crate::shared::Result;
use std::path::Path;

/// CsvReportWriter adapter for writing the report as CSV
///
/// Two columns, `part_number,quantity`, without a header record.
pub struct CsvReportWriter;

impl CsvReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(&self, required: &RequiredQuantities, destination: &Path) -> Result<()> {
        validate_output_path(destination)?;

        let write_error = |e: csv::Error| RollupError::FileWriteError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(destination)
            .map_err(write_error)?;

        for (part_number, quantity) in required.iter() {
            writer
                .write_record([part_number.as_str(), quantity.to_string().as_str()])
                .map_err(write_error)?;
        }

        writer.flush().map_err(|e| RollupError::FileWriteError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}
