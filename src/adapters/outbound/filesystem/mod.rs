/// Filesystem adapters for writing the roll-up report
mod csv_writer;
mod xlsx_writer;

pub use csv_writer::CsvReportWriter;
pub use xlsx_writer::XlsxReportWriter;
