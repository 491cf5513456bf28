//! File size lookup

use std::fs;
use std::path::Path;

use crate::errors::{file_operation_error, Result};

/// Reads the size of a file and formats it in KiB with two decimals
///
/// # Errors
/// Returns a file operation error if the file cannot be inspected; no size is
/// made up in that case
pub fn size_in_kib(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "read size of"))?;
    Ok(format_kib(metadata.len()))
}

/// Formats a byte count in KiB with two decimals
pub fn format_kib(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}
