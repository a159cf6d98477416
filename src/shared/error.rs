use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow calling scripts to distinguish argument mistakes
/// from failed roll-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report written, or nothing to roll up
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the BoM roll-up.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Every variant aborts the run; no partial report is ever written.
#[derive(Debug, Error)]
pub enum RollupError {
    #[error("BoM API returned status {status} for {path}\nBody: {body}\n\n💡 Hint: Check that the BoM API host is correct and the service is available")]
    Upstream {
        path: String,
        status: u16,
        body: String,
    },

    #[error("Failed to reach BoM API: {path}\nDetails: {details}\n\n💡 Hint: Check your network connection or increase request_timeout_secs")]
    Transport { path: String, details: String },

    #[error("Unexpected response from BoM API: {path}\nDetails: {details}")]
    InvalidResponse { path: String, details: String },

    #[error("Malformed BoM edge: {details}")]
    MalformedEdge { details: String },

    #[error("Cycle detected in bill of materials at part {part_id}\n\n💡 Hint: A part cannot (directly or indirectly) contain itself")]
    CyclicBom { part_id: u64 },

    #[error("Required quantity overflowed for part {part_id}")]
    QuantityOverflow { part_id: u64 },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid output path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular file path for the report")]
    InvalidOutputPath { path: PathBuf, reason: String },

    #[error("Invalid config file: {path}\nDetails: {details}")]
    ConfigError { path: PathBuf, details: String },
}
