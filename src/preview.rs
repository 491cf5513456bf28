//! Rename previews
//!
//! A preview pairs a file on disk with the name a rename plan proposes for it.
//! Nothing is renamed here.

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;
use rayon::prelude::*;

use crate::errors::Result;
use crate::logging::format_message;
use crate::name::FileName;
use crate::size::size_in_kib;
use crate::transform::{apply_all, Operation};

/// The name a file has and the one proposed for it
#[derive(Debug, Clone, PartialEq)]
pub struct RenamePreview {
    pub original: FileName,
    pub proposed: FileName,
    /// Size of the file in KiB, with two decimals
    pub size_kib: String,
}

impl RenamePreview {
    /// Checks if the proposed name differs from the current one
    pub fn is_changed(&self) -> bool {
        self.original.name() != self.proposed.name()
    }

    /// One line summary, coloured when stdout is a terminal
    pub fn describe(&self) -> String {
        let original = self.original.name();
        let proposed = self.proposed.name();
        let size = &self.size_kib;

        if !self.is_changed() {
            let plain = format!("{original} (unchanged, {size} KiB)");
            return format_message(&plain, &plain.dimmed().to_string());
        }

        let plain = format!("{original} -> {proposed} ({size} KiB)");
        let colored = format!("{original} -> {} ({size} KiB)", proposed.green());
        format_message(&plain, &colored)
    }
}

/// Builds the preview for one file
///
/// # Errors
/// * Returns an invalid filename error if the path has no usable file name
/// * Returns a file operation error if the file size cannot be read
/// * Returns an invalid argument error if an operation is malformed
pub fn preview_file(path: &Path, operations: &[Operation]) -> Result<RenamePreview> {
    let original = FileName::from_path(path)?;
    let size_kib = size_in_kib(path)?;
    let proposed = apply_all(&original, operations)?;

    debug!("Previewed {} -> {}", path.display(), proposed.name());

    Ok(RenamePreview {
        original,
        proposed,
        size_kib,
    })
}

/// Builds previews for many files in parallel
///
/// Results come back in the order of `paths`, one per path.
pub fn preview_files(paths: &[PathBuf], operations: &[Operation]) -> Vec<Result<RenamePreview>> {
    paths
        .par_iter()
        .map(|path| preview_file(path, operations))
        .collect()
}
