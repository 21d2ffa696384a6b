use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parser::{MovieInfo, TvInfo};

use super::{normalize_extension, validate_extension};

/// Errors raised while turning user input into operations
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid extension '{ext}': {reason}")]
    InvalidExtension { ext: String, reason: String },

    #[error("Malformed operation '{0}'")]
    MalformedSpec(String),
}

/// Case conversion applied to the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Upper,
    Lower,
    Title,
    Snake,
    /// Any mode name we don't know; leaves the stem alone
    Unrecognized,
}

impl CaseMode {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => CaseMode::Upper,
            "lower" | "lowercase" => CaseMode::Lower,
            "title" => CaseMode::Title,
            "snake" | "snake_case" => CaseMode::Snake,
            _ => CaseMode::Unrecognized,
        }
    }
}

/// How find/replace locates text in the stem.
#[derive(Debug, Clone)]
pub enum Finder {
    Literal(String),
    Pattern(Regex),
}

/// A single validated rename step.
///
/// Built through the constructors (or `from_spec`), which reject bad regexes
/// and extensions up front; the pipeline itself never fails.
#[derive(Debug, Clone)]
pub enum Operation {
    FindReplace { finder: Finder, replace: String },
    Prefix(String),
    Suffix(String),
    Case(CaseMode),
    /// Normalized extension including its leading dot
    ExtChange(String),
    MediaTv { info: TvInfo, file: Option<String> },
    MediaMovie { info: MovieInfo, file: Option<String> },
    /// Operation type this version does not know; passed through untouched
    Unknown,
}

impl Operation {
    pub fn find_replace(find: &str, replace: &str, regex: bool) -> Result<Self, OperationError> {
        // An empty find matches nothing in either mode
        if !regex || find.is_empty() {
            return Ok(Operation::FindReplace {
                finder: Finder::Literal(find.to_string()),
                replace: replace.to_string(),
            });
        }

        let compiled = Regex::new(find).map_err(|source| OperationError::InvalidRegex {
            pattern: find.to_string(),
            source,
        })?;

        let replace = expansion_syntax(replace, compiled.captures_len());
        Ok(Operation::FindReplace {
            finder: Finder::Pattern(compiled),
            replace,
        })
    }

    pub fn ext_change(ext: &str) -> Result<Self, OperationError> {
        let normalized = normalize_extension(ext);
        validate_extension(&normalized).map_err(|reason| OperationError::InvalidExtension {
            ext: ext.to_string(),
            reason,
        })?;
        Ok(Operation::ExtChange(normalized))
    }

    pub fn from_spec(spec: &OperationSpec) -> Result<Self, OperationError> {
        let op = match spec {
            OperationSpec::FindReplace {
                find,
                replace,
                regex,
            } => Operation::find_replace(find, replace, *regex)?,
            OperationSpec::Prefix { prefix } => Operation::Prefix(prefix.clone()),
            OperationSpec::Suffix { suffix } => Operation::Suffix(suffix.clone()),
            OperationSpec::Case { mode } => Operation::Case(CaseMode::from_name(mode)),
            OperationSpec::ExtChange { ext } => Operation::ext_change(ext)?,
            OperationSpec::MediaTv { info, file } => Operation::MediaTv {
                info: info.clone(),
                file: file.clone(),
            },
            OperationSpec::MediaMovie { info, file } => Operation::MediaMovie {
                info: info.clone(),
                file: file.clone(),
            },
            OperationSpec::Unknown => Operation::Unknown,
        };
        Ok(op)
    }
}

/// Rewrite a user replacement into `regex` expansion syntax.
///
/// `\N` and `$N` become `${N}` when the pattern has group N; otherwise they
/// stay literal text. `\\` is one literal backslash, `${name}` and `$$` pass
/// through, and any other `$` is literal.
fn expansion_syntax(replace: &str, groups: usize) -> String {
    let mut out = String::with_capacity(replace.len());
    let mut chars = replace.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                Some(d) if d.is_ascii_digit() => push_group(&mut out, &mut chars, "\\", groups),
                _ => out.push('\\'),
            },
            '$' => match chars.peek() {
                Some(d) if d.is_ascii_digit() => push_group(&mut out, &mut chars, "$$", groups),
                Some('$') => {
                    chars.next();
                    out.push_str("$$");
                }
                Some('{') => out.push('$'),
                _ => out.push_str("$$"),
            },
            _ => out.push(c),
        }
    }

    out
}

fn push_group(out: &mut String, chars: &mut Peekable<Chars<'_>>, literal: &str, groups: usize) {
    let mut digits = String::new();
    while let Some(d) = chars.next_if(char::is_ascii_digit) {
        digits.push(d);
    }

    match digits.parse::<usize>() {
        Ok(n) if n < groups => {
            out.push_str("${");
            out.push_str(&digits);
            out.push('}');
        }
        _ => {
            out.push_str(literal);
            out.push_str(&digits);
        }
    }
}

/// Ordered operations applied to one filename
pub type Plan = Vec<Operation>;

/// Serializable description of an operation, as found in plan files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperationSpec {
    FindReplace {
        find: String,
        #[serde(default)]
        replace: String,
        #[serde(default)]
        regex: bool,
    },
    Prefix {
        prefix: String,
    },
    Suffix {
        suffix: String,
    },
    Case {
        mode: String,
    },
    ExtChange {
        ext: String,
    },
    MediaTv {
        info: TvInfo,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file: Option<String>,
    },
    MediaMovie {
        info: MovieInfo,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

/// Which media parser a command-line suggestion asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Tv,
    Movie,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Tv => write!(f, "tv"),
            MediaKind::Movie => write!(f, "movie"),
        }
    }
}

/// One `--op` value from the command line.
///
/// Media suggestions are resolved per file by the batch layer; every other
/// step maps directly onto an `OperationSpec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSpec {
    Op(OperationSpec),
    Media(MediaKind),
}

const REPLACE_ARROW: &str = "=>";

impl FromStr for StepSpec {
    type Err = OperationError;

    /// Forms: `replace:FIND=>REPL`, `regex:PATTERN=>REPL`, `prefix:TEXT`,
    /// `suffix:TEXT`, `case:MODE`, `ext:EXT`, `tv`, `movie`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || OperationError::MalformedSpec(s.to_string());

        match s {
            "tv" => return Ok(StepSpec::Media(MediaKind::Tv)),
            "movie" => return Ok(StepSpec::Media(MediaKind::Movie)),
            _ => {}
        }

        let (kind, arg) = s.split_once(':').ok_or_else(malformed)?;

        let spec = match kind {
            "replace" | "regex" => {
                let (find, replace) = arg.split_once(REPLACE_ARROW).ok_or_else(malformed)?;
                if find.is_empty() {
                    return Err(malformed());
                }
                OperationSpec::FindReplace {
                    find: find.to_string(),
                    replace: replace.to_string(),
                    regex: kind == "regex",
                }
            }
            "prefix" => OperationSpec::Prefix {
                prefix: arg.to_string(),
            },
            "suffix" => OperationSpec::Suffix {
                suffix: arg.to_string(),
            },
            "case" => OperationSpec::Case {
                mode: arg.to_string(),
            },
            "ext" => OperationSpec::ExtChange {
                ext: arg.to_string(),
            },
            _ => return Err(malformed()),
        };

        Ok(StepSpec::Op(spec))
    }
}
