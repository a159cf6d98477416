use crate::ports::outbound::ReportWriter;
use crate::rollup::domain::RequiredQuantities;
use crate::shared::error::RollupError;
use crate::shared::security::validate_output_path;
use crate::shared::Result;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Largest quantity an Excel number cell holds without rounding (2^53)
const MAX_EXACT_NUMBER: u64 = 1 << 53;

/// XlsxReportWriter adapter for writing the report as an Excel workbook
///
/// One worksheet; column A holds the part number, column B the quantity.
/// No header row. Quantities above 2^53 are written as text so they are
/// never rounded.
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(destination: &Path, details: impl ToString) -> anyhow::Error {
        RollupError::FileWriteError {
            path: destination.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }
}

impl Default for XlsxReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write_report(&self, required: &RequiredQuantities, destination: &Path) -> Result<()> {
        validate_output_path(destination)?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (row, (part_number, quantity)) in required.iter().enumerate() {
            let row = u32::try_from(row).map_err(|e| Self::write_error(destination, e))?;
            worksheet
                .write_string(row, 0, part_number.as_str())
                .map_err(|e| Self::write_error(destination, e))?;
            if quantity <= MAX_EXACT_NUMBER {
                worksheet
                    .write_number(row, 1, quantity as f64)
                    .map_err(|e| Self::write_error(destination, e))?;
            } else {
                worksheet
                    .write_string(row, 1, quantity.to_string())
                    .map_err(|e| Self::write_error(destination, e))?;
            }
        }

        workbook
            .save(destination)
            .map_err(|e| Self::write_error(destination, e))?;

        Ok(())
    }
}
