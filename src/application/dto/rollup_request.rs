use std::path::PathBuf;

/// Default report file name when neither the CLI nor the config names one
pub const DEFAULT_OUTPUT_FILENAME: &str = "roll_up_output.xlsx";

/// RollupRequest - Internal request DTO for the roll-up use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupRequest {
    /// Destination of the report file
    pub output_path: PathBuf,
}

impl RollupRequest {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl Default for RollupRequest {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILENAME)
    }
}
