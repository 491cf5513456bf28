//! File names
//!
//! This module holds the immutable (parent, name) pair every transformation
//! works on, together with the rules that find a name's extension.

mod extension;

use std::path::{Path, PathBuf};

use crate::errors::{invalid_filename_error, Result};

pub use extension::{
    base_name, base_name_length, count_occurrences, extension, has_extension, split_extension,
};

/// A file name split from the directory that holds it
///
/// Transformations never touch `parent`; they only compute a new `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName {
    parent: PathBuf,
    name: String,
}

impl FileName {
    pub fn new(parent: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        FileName {
            parent: parent.into(),
            name: name.into(),
        }
    }

    /// Splits a path into its parent directory and its final component
    ///
    /// # Errors
    /// Returns an invalid filename error if the path has no final component
    /// or if that component is not valid Unicode
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|os_str| os_str.to_str())
            .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;
        let parent = path.parent().unwrap_or_else(|| Path::new(""));

        Ok(FileName::new(parent, name))
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a file name in the same directory under a different name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        FileName::new(self.parent.clone(), name)
    }

    /// Joins the parent and the name back into a path
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    pub fn extension(&self) -> &str {
        extension(&self.name)
    }

    pub fn has_extension(&self) -> bool {
        has_extension(&self.name)
    }

    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }
}
