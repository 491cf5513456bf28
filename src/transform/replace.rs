//! Literal text replacement

use crate::errors::{invalid_argument_error, Result};
use crate::name::FileName;

/// Replaces every occurrence of `original` with `replacement`
///
/// The replacement runs over the whole name. When the file has an extension,
/// as many characters as the original extension holds are then cut from the
/// end of the result and the original extension is put back in their place,
/// so a replacement that reaches into the extension only survives in the
/// base name.
///
/// # Errors
/// Returns an invalid argument error if `original` is empty
pub fn replace_all(file: &FileName, original: &str, replacement: &str) -> Result<FileName> {
    if original.is_empty() {
        return Err(invalid_argument_error(
            "original",
            "cannot replace an empty string",
        ));
    }

    let replaced = file.name().replace(original, replacement);
    if !file.has_extension() {
        return Ok(file.with_name(replaced));
    }

    let extension = file.extension();
    let kept = drop_last_chars(&replaced, extension.chars().count());
    Ok(file.with_name(format!("{kept}{extension}")))
}

fn drop_last_chars(value: &str, count: usize) -> &str {
    let keep = value.chars().count().saturating_sub(count);
    match value.char_indices().nth(keep) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}
