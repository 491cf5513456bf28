//! Transformations that move characters around without changing them

use log::debug;

use crate::name::{count_occurrences, split_extension, FileName};

/// Reverses the base name, keeping the extension where it was
///
/// Reversal works on `char`s, so a combining mark ends up in front of the
/// character it used to follow.
///
/// ```
/// use namely::{reverse_base_name, FileName};
///
/// let file = FileName::new("/tmp", "report.txt");
/// assert_eq!(reverse_base_name(&file).name(), "troper.txt");
/// ```
pub fn reverse_base_name(file: &FileName) -> FileName {
    let reversed: String = file.base_name().chars().rev().collect();
    let extension = if file.has_extension() {
        file.extension()
    } else {
        ""
    };

    file.with_name(format!("{reversed}{extension}"))
}

/// Swaps the two parts of the base name on either side of `separator`
///
/// `"A - B.txt"` around `'-'` becomes `"B - A.txt"`. Whitespace around each
/// part is trimmed and `spacing` decides whether a single space goes back on
/// both sides of the separator.
///
/// The name is returned unchanged when `separator` is `.`, when the name does
/// not hold exactly one `separator`, or when that one occurrence sits inside
/// the extension.
pub fn swap_around_separator(file: &FileName, separator: char, spacing: bool) -> FileName {
    let name = file.name();
    let mut buffer = [0; 4];
    let separator_str: &str = separator.encode_utf8(&mut buffer);

    if separator == '.' || !matches!(count_occurrences(name, separator_str), Ok(1)) {
        debug!("Not swapping '{name}' around '{separator}': separator is ambiguous");
        return file.clone();
    }

    let (eligible, extension) = if file.has_extension() {
        split_extension(name)
    } else {
        (name, "")
    };

    let Some(index) = eligible.find(separator) else {
        debug!("Not swapping '{name}' around '{separator}': separator is in the extension");
        return file.clone();
    };

    let part_one = eligible[..index].trim();
    let part_two = eligible[index + separator.len_utf8()..].trim();
    let space = if spacing { " " } else { "" };

    file.with_name(format!(
        "{part_two}{space}{separator}{space}{part_one}{extension}"
    ))
}
