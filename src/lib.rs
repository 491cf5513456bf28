//! Namely proposes new names for files.
//!
//! Every transformation is a pure function from a [`FileName`] (the parent
//! directory plus the name) to a new `FileName` in the same directory. The
//! only file system access is the read-only size lookup in [`size_in_kib`].
//! Actually renaming files is left to the caller.
//!
//! ```
//! use namely::{apply_all, CaseMode, FileName, Operation};
//!
//! let file = FileName::new("/music", "Artist - Title.mp3");
//! let operations = [
//!     Operation::Swap { separator: '-', spacing: true },
//!     Operation::Case { mode: CaseMode::Lowercase },
//! ];
//!
//! let renamed = apply_all(&file, &operations).unwrap();
//! assert_eq!(renamed.name(), "title - artist");
//! ```

pub use config::Config;
pub use errors::*;
pub use name::{
    base_name, base_name_length, count_occurrences, extension, has_extension, split_extension,
    FileName,
};
pub use preview::{preview_file, preview_files, RenamePreview};
pub use size::{format_kib, size_in_kib};
pub use transform::{
    apply_all, change_case, replace_all, reverse_base_name, swap_around_separator, CaseMode,
    Operation,
};

pub mod cli;
pub mod config;
mod constants;
mod errors;
pub mod logging;
mod name;
mod preview;
mod size;
pub mod transform;

pub mod prelude {
    pub use crate::cli::{get_files, get_log_file, get_matches, get_operations, get_verbosity};
    pub use crate::errors::{
        config_parsing_error, file_operation_error, generic_error, glob_pattern_error,
        invalid_argument_error, invalid_filename_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::{apply_all, preview_files, FileName, Operation, RenamePreview};
}
