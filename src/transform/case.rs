//! Letter case changes

use std::str::FromStr;

use serde::Deserialize;

use crate::name::{base_name_length, FileName};

/// How `change_case` treats letters
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Every letter in lowercase
    #[serde(rename = "lowercase", alias = "lower")]
    Lowercase,
    /// Every letter in uppercase
    #[serde(rename = "uppercase", alias = "upper")]
    Uppercase,
    /// Uppercase letters become lowercase and everything else uppercase
    #[serde(rename = "invert", alias = "invertcase")]
    InvertCase,
}

impl FromStr for CaseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CaseMode::Lowercase),
            "upper" | "uppercase" => Ok(CaseMode::Uppercase),
            "invert" | "invertcase" => Ok(CaseMode::InvertCase),
            _ => Err(format!("Unknown case mode: {s}")),
        }
    }
}

/// Changes the letter case of the name
///
/// The case change is applied to the whole name and the result is then cut
/// down to the length of the base name. The extension is not put back, so
/// `"REPORT.TXT"` in lowercase becomes `"report"`. A name without an
/// extension keeps its full length.
pub fn change_case(file: &FileName, mode: CaseMode) -> FileName {
    let name = file.name();
    let length = if file.has_extension() {
        base_name_length(name)
    } else {
        name.chars().count()
    };

    let changed = match mode {
        CaseMode::Lowercase => name.to_lowercase(),
        CaseMode::Uppercase => name.to_uppercase(),
        CaseMode::InvertCase => invert_case(name),
    };

    file.with_name(changed.chars().take(length).collect::<String>())
}

// Each character maps to exactly one character. A letter whose case mapping
// expands (`ß` to `SS`) is kept as it is.
fn invert_case(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_uppercase() {
                single_char(c.to_lowercase()).unwrap_or(c)
            } else {
                single_char(c.to_uppercase()).unwrap_or(c)
            }
        })
        .collect()
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
