//! File name transformations
//!
//! Every transformation takes a `FileName` and returns a new one in the same
//! parent directory. None of them touch the file system.

mod case;
mod operation;
mod reorder;
mod replace;

pub use case::{change_case, CaseMode};
pub use operation::{apply_all, Operation};
pub use reorder::{reverse_base_name, swap_around_separator};
pub use replace::replace_all;
