use crate::shared::error::RollupError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates a report destination before anything is written to it
///
/// The parent directory must exist, and an existing destination must be a
/// regular file rather than a directory or a symbolic link.
///
/// # Errors
/// Returns `RollupError::FileWriteError` for a missing parent directory and
/// `RollupError::InvalidOutputPath` for a symlink or directory destination.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(RollupError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    // Nothing more to check for a file that does not exist yet
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(RollupError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
        }
        .into());
    }

    if metadata.is_dir() {
        return Err(RollupError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: "Output path is a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
