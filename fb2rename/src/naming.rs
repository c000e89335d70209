//! Filename construction from book metadata.
//!
//! Names have the shape `Author - TAG - Title`, where `TAG` is the initials
//! of the series name followed by the zero-padded series number, e.g.
//! `J R - GS03 - Book`. Missing parts are left out together with their
//! separator.

use unicode_normalization::char::is_combining_mark;

use crate::metadata::BookMetadata;

/// Separator between name segments
pub const SEPARATOR: &str = " - ";

/// Minimum width of the series number in a tag
pub const NUMBER_WIDTH: usize = 2;

/// Words skipped when taking series initials (compared after uppercasing)
pub const STOP_WORDS: &[&str] = &["A", "AN", "THE", "AND", "OR", "И", "ИЛИ", "О"];

/// Build the filename stem for a book. Never fails; may return "".
pub fn construct_name(metadata: &BookMetadata) -> String {
    let segments = [
        Some(author_segment(metadata)),
        series_tag(
            metadata.series_name.as_deref(),
            metadata.series_number.as_deref(),
        ),
        metadata.book_title.clone(),
    ];

    let name = segments
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    sanitize(&name)
}

/// First and last name joined by a space, skipping empty parts.
pub fn author_segment(metadata: &BookMetadata) -> String {
    [&metadata.author_first_name, &metadata.author_last_name]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Series initials plus padded number, or `None` without a series number.
///
/// A missing series name only drops the initials: `(None, Some("7"))`
/// gives `"07"`.
pub fn series_tag(name: Option<&str>, number: Option<&str>) -> Option<String> {
    let number = number.filter(|n| !n.is_empty())?;
    Some(format!(
        "{}{}",
        initials(name.unwrap_or("")),
        pad_number(number)
    ))
}

/// Uppercased first letters of the non-stop-words of `name`.
pub fn initials(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    cleaned
        .trim()
        .to_uppercase()
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Letters, digits and underscore. Combining marks (e.g. Devanagari vowel
/// signs) are alphabetic in Unicode but separate words here.
fn is_word_char(c: char) -> bool {
    c == '_' || (c.is_alphanumeric() && !is_combining_mark(c))
}

/// Left-pad `number` with zeros to [`NUMBER_WIDTH`] characters.
///
/// This is plain text padding: `"3"` becomes `"03"`, `"100"` stays as is and
/// a non-numeric `"x"` becomes `"0x"`.
pub fn pad_number(number: &str) -> String {
    let len = number.chars().count();
    if len >= NUMBER_WIDTH {
        return number.to_string();
    }
    format!("{}{}", "0".repeat(NUMBER_WIDTH - len), number)
}

/// Remove characters that are not kept in file names (colons).
pub fn sanitize(name: &str) -> String {
    name.replace(':', "")
}
