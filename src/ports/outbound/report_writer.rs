use crate::rollup::domain::RequiredQuantities;
use crate::shared::Result;
use std::path::Path;

/// ReportWriter port for persisting the roll-up result
///
/// This port abstracts the report format (XLSX workbook, CSV file, etc.).
/// The destination is chosen per run and passed in.
pub trait ReportWriter {
    /// Writes one row per part number: `[part_number, quantity]`
    ///
    /// Rows follow the iteration order of `required`. No header row is written.
    ///
    /// # Arguments
    /// * `required` - Final roll-up totals
    /// * `destination` - Path of the report file to create or replace
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination is not a writable regular file path
    /// - Serialization or the write itself fails
    fn write_report(&self, required: &RequiredQuantities, destination: &Path) -> Result<()>;
}

impl<T: ReportWriter + ?Sized> ReportWriter for &T {
    fn write_report(&self, required: &RequiredQuantities, destination: &Path) -> Result<()> {
        (**self).write_report(required, destination)
    }
}

impl<T: ReportWriter + ?Sized> ReportWriter for Box<T> {
    fn write_report(&self, required: &RequiredQuantities, destination: &Path) -> Result<()> {
        (**self).write_report(required, destination)
    }
}
