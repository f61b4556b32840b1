use crate::error::{NamingError, Result};

pub const CHANGESET_EXTENSION: &str = "md";

/// Directory a package lives in under the packages root: the last `/`
/// separated segment of its identifier (`@scope/pkg` -> `pkg`).
///
/// # Errors
///
/// Returns [`NamingError::EmptyDirectorySegment`] if the identifier is empty or
/// ends with a separator.
pub fn package_dir_name(name: &str) -> Result<&str> {
    match name.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => Ok(segment),
        _ => Err(NamingError::EmptyDirectorySegment {
            name: name.to_string(),
        }),
    }
}

/// Changeset file name for a package identifier. The full identifier is used,
/// so `@scope/pkg` and `pkg` land in different files.
///
/// # Errors
///
/// Returns [`NamingError::EmptyFilename`] if the identifier contains no word
/// characters.
pub fn changeset_filename(name: &str) -> Result<String> {
    let stem = snake_case(name);
    if stem.is_empty() {
        return Err(NamingError::EmptyFilename {
            name: name.to_string(),
        });
    }
    Ok(format!("{stem}.{CHANGESET_EXTENSION}"))
}

/// Lower-cased words joined by `_`, split the way lodash's `snakeCase` splits
/// them: on punctuation, on camel-case humps, before the last capital of an
/// acronym, and between letters and digits.
#[must_use]
pub fn snake_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Upper,
    Lower,
    Digit,
}

impl CharKind {
    fn of(c: char) -> Self {
        if c.is_numeric() {
            Self::Digit
        } else if c.is_uppercase() {
            Self::Upper
        } else {
            Self::Lower
        }
    }
}

fn words(input: &str) -> Vec<String> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect();

    let mut words = Vec::new();
    for chunk in cleaned
        .split(|c: char| !c.is_alphanumeric())
        .filter(|chunk| !chunk.is_empty())
    {
        split_chunk(chunk, &mut words);
    }
    words
}

fn split_chunk(chunk: &str, words: &mut Vec<String>) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let prev = CharKind::of(chars[i - 1]);
        let current = CharKind::of(chars[i]);

        match (prev, current) {
            (CharKind::Digit, CharKind::Digit) => {}
            (CharKind::Digit, _) | (_, CharKind::Digit) | (CharKind::Lower, CharKind::Upper) => {
                words.push(chars[start..i].iter().collect());
                start = i;
            }
            // "HTMLParser": the capital before the lowercase run opens a new word
            (CharKind::Upper, CharKind::Lower) if i - 1 > start => {
                words.push(chars[start..i - 1].iter().collect());
                start = i - 1;
            }
            _ => {}
        }
    }

    if start < chars.len() {
        words.push(chars[start..].iter().collect());
    }
}
