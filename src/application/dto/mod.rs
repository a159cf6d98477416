/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod report_format;
mod rollup_request;
mod rollup_response;

pub use report_format::ReportFormat;
pub use rollup_request::{RollupRequest, DEFAULT_OUTPUT_FILENAME};
pub use rollup_response::RollupResponse;
