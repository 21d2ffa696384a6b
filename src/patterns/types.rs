use serde::Serialize;

/// A library pattern that recurs across the scanned filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    /// Human-readable label
    pub name: String,

    /// Regex source, usable as-is for a find/replace operation
    pub regex: String,

    /// Number of stems the pattern matched
    pub match_count: usize,

    /// First matched substrings, in input order
    pub examples: Vec<String>,
}
