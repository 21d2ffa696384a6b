mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::naming::{split_extension, EXTENSION_SEPARATOR};
use crate::parser::{MovieInfo, TvInfo};

/// Characters no filename component may contain
pub const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

static SNAKE_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ -]+").unwrap());

/// Compute the candidate name for `original` by folding `plan` over its
/// stem and extension.
///
/// A media operation that applies to the file ends the fold and returns the
/// formatted media name with the extension accumulated so far.
pub fn compute_new_name(original: &str, plan: &[Operation]) -> String {
    let (stem, ext) = split_extension(original);
    let mut stem = stem.to_string();
    let mut ext = ext.to_string();

    for op in plan {
        match op {
            Operation::FindReplace { finder, replace } => {
                stem = match finder {
                    Finder::Literal(find) if find.is_empty() => stem,
                    Finder::Literal(find) => stem.replace(find.as_str(), replace),
                    Finder::Pattern(regex) => regex.replace_all(&stem, replace.as_str()).into_owned(),
                };
            }
            Operation::Prefix(prefix) => stem.insert_str(0, prefix),
            Operation::Suffix(suffix) => stem.push_str(suffix),
            Operation::Case(mode) => stem = apply_case(&stem, *mode),
            Operation::ExtChange(new_ext) => ext = new_ext.clone(),
            Operation::MediaTv { info, file } => {
                if applies_to(file.as_deref(), original) {
                    return format_tv_name(info, &ext);
                }
                trace!(original, target = ?file, "Media TV operation targets another file");
            }
            Operation::MediaMovie { info, file } => {
                if applies_to(file.as_deref(), original) {
                    return format_movie_name(info, &ext);
                }
                trace!(original, target = ?file, "Media movie operation targets another file");
            }
            Operation::Unknown => {}
        }
    }

    stem + &ext
}

fn applies_to(target: Option<&str>, original: &str) -> bool {
    target.map_or(true, |name| name == original)
}

/// Re-case a stem. Unrecognized modes return it unchanged.
pub fn apply_case(stem: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => stem.to_uppercase(),
        CaseMode::Lower => stem.to_lowercase(),
        CaseMode::Title => title_case(stem),
        CaseMode::Snake => SNAKE_SEPARATOR_REGEX
            .replace_all(&stem.to_lowercase(), "_")
            .into_owned(),
        CaseMode::Unrecognized => stem.to_string(),
    }
}

/// Words are delimited by whitespace or underscores; the first letter of
/// each is uppercased and the rest lowercased.
fn title_case(stem: &str) -> String {
    let mut result = String::with_capacity(stem.len());
    let mut at_word_start = true;

    for c in stem.chars() {
        if c.is_whitespace() || c == '_' {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Normalize user input to a single-dot extension ("jpg" and "..jpg" both
/// become ".jpg"). Input made only of dots becomes empty.
pub fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim_matches(EXTENSION_SEPARATOR);
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{}{}", EXTENSION_SEPARATOR, trimmed)
}

/// Check a normalized extension, returning the reason it is unusable.
pub fn validate_extension(ext: &str) -> Result<(), String> {
    let body = ext.strip_prefix(EXTENSION_SEPARATOR).unwrap_or(ext);

    if body.is_empty() {
        return Err("extension is empty".to_string());
    }
    if body.contains(' ') {
        return Err("extension contains spaces".to_string());
    }
    if let Some(c) = body.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(format!("extension contains illegal character '{}'", c));
    }

    Ok(())
}

/// `"<Show> - SxxEyy[ - <Title>]<ext>"`
pub fn format_tv_name(info: &TvInfo, ext: &str) -> String {
    let mut name = format!("{} - S{:02}E{:02}", info.show, info.season, info.episode);
    if !info.title.is_empty() {
        name.push_str(" - ");
        name.push_str(&info.title);
    }
    name.push_str(ext);
    name
}

/// `"<Title> (<year>)<ext>"`
pub fn format_movie_name(info: &MovieInfo, ext: &str) -> String {
    format!("{} ({}){}", info.title, info.year, ext)
}
