//! Transformation steps
//!
//! A rename plan is a list of steps applied one after another. Each step is
//! described in YAML by its `name` plus the fields it needs.

use log::trace;
use serde::Deserialize;

use crate::errors::Result;
use crate::name::FileName;

use super::case::{change_case, CaseMode};
use super::reorder::{reverse_base_name, swap_around_separator};
use super::replace::replace_all;

/// A single transformation of a file name
///
/// # Examples
///
/// ```yaml
/// operations:
///   - name: replace
///     original: "_"
///     replacement: " "
///   - name: swap
///     separator: "-"
///     spacing: true
///   - name: case
///     mode: lowercase
///   - name: reverse
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
#[serde(tag = "name")]
pub enum Operation {
    /// Reverse the base name
    Reverse,
    /// Swap the parts of the base name around a separator
    Swap {
        separator: char,
        #[serde(default)]
        spacing: bool,
    },
    /// Replace literal text
    Replace {
        original: String,
        #[serde(default)]
        replacement: String,
    },
    /// Change letter case
    Case { mode: CaseMode },
}

impl Operation {
    /// Applies this step to a file name
    ///
    /// # Errors
    /// Returns an invalid argument error if a replacement searches for an empty string
    pub fn apply(&self, file: &FileName) -> Result<FileName> {
        let renamed = match self {
            Operation::Reverse => reverse_base_name(file),
            Operation::Swap { separator, spacing } => {
                swap_around_separator(file, *separator, *spacing)
            }
            Operation::Replace {
                original,
                replacement,
            } => replace_all(file, original, replacement)?,
            Operation::Case { mode } => change_case(file, *mode),
        };

        trace!("{self:?}: '{}' -> '{}'", file.name(), renamed.name());
        Ok(renamed)
    }
}

/// Applies every step in order, stopping at the first failure
pub fn apply_all(file: &FileName, operations: &[Operation]) -> Result<FileName> {
    operations
        .iter()
        .try_fold(file.clone(), |current, operation| operation.apply(&current))
}
