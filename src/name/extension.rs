//! Extension rules
//!
//! A name's extension runs from its last `.` to the end. A name without any
//! `.` has the whole name as its extension, which is why `has_extension`
//! compares lengths instead of looking for a dot.

use log::trace;

use crate::errors::{invalid_argument_error, Result};

/// Counts the non-overlapping occurrences of `substring` in `name`
///
/// The count is derived from how much shorter `name` becomes once every
/// occurrence has been removed, so `"aaa"` holds `"aa"` exactly once.
///
/// # Errors
/// Returns an invalid argument error if `substring` is empty
pub fn count_occurrences(name: &str, substring: &str) -> Result<usize> {
    if substring.is_empty() {
        return Err(invalid_argument_error(
            "substring",
            "cannot count occurrences of an empty string",
        ));
    }

    let removed = name.len() - name.replace(substring, "").len();
    Ok(removed / substring.len())
}

/// Returns the extension of `name`, or the whole name when it has no `.`
pub fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[index..],
        None => name,
    }
}

/// Splits `name` into its base and its extension
///
/// ```
/// use namely::split_extension;
///
/// assert_eq!(split_extension("report.txt"), ("report", ".txt"));
/// assert_eq!(split_extension("README"), ("", "README"));
/// ```
pub fn split_extension(name: &str) -> (&str, &str) {
    let ext = extension(name);
    (&name[..name.len() - ext.len()], ext)
}

/// Returns `true` if the name has an extension shorter than itself
pub fn has_extension(name: &str) -> bool {
    name.len() != extension(name).len()
}

/// Returns the name without its extension
///
/// A name whose extension is not strictly shorter than itself is returned as is.
pub fn base_name(name: &str) -> &str {
    let ext = extension(name);
    if name.len() > ext.len() {
        &name[..name.len() - ext.len()]
    } else {
        trace!("'{name}' has no extension, keeping the whole name as its base");
        name
    }
}

/// Number of `char`s in front of the extension
///
/// The count is in Unicode scalar values, not bytes, so it cannot be used to
/// slice the name with `str` indices. A name without any `.` has a length of
/// 0 here, since its extension is the whole name.
pub fn base_name_length(name: &str) -> usize {
    name.chars().count() - extension(name).chars().count()
}
