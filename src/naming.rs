//! Filename decomposition and the word normalization shared by the parsers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between stem and extension.
pub const EXTENSION_SEPARATOR: char = '.';

static SEPARATOR_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[._-]+").unwrap());

/// Split a filename into `(stem, extension)` at the last separator.
///
/// The extension keeps its leading dot and may be empty; `stem + extension`
/// always equals the input.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind(EXTENSION_SEPARATOR) {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Capitalize the first letter of every whitespace-separated word and
/// lowercase the rest, joining words with a single space.
pub fn title_case_words(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turn a release-style segment ("breaking.bad", "the_office") into a
/// display title ("Breaking Bad", "The Office").
pub fn normalize_title(segment: &str) -> String {
    let spaced = SEPARATOR_RUN_REGEX.replace_all(segment, " ");
    title_case_words(spaced.trim())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
