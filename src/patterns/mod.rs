mod library;
mod types;

pub use library::{PatternDef, PATTERN_LIBRARY};
pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::naming::split_extension;

/// Minimum number of matching stems for a pattern to be reported
pub const MATCH_THRESHOLD: usize = 2;

/// Maximum number of example matches kept per pattern
pub const MAX_EXAMPLES: usize = 3;

static COMPILED_LIBRARY: Lazy<Vec<(&'static PatternDef, Regex)>> = Lazy::new(|| {
    PATTERN_LIBRARY
        .iter()
        .map(|def| (def, Regex::new(def.regex).unwrap()))
        .collect()
});

/// Find library patterns that occur in at least `MATCH_THRESHOLD` stems.
pub fn detect_patterns<S: AsRef<str>>(filenames: &[S]) -> Vec<PatternMatch> {
    let stems: Vec<&str> = filenames
        .iter()
        .map(|f| split_extension(f.as_ref()).0)
        .collect();

    let mut results = Vec::new();

    for (def, regex) in COMPILED_LIBRARY.iter() {
        let mut match_count = 0;
        let mut examples = Vec::new();

        for stem in &stems {
            if let Some(m) = regex.find(stem) {
                trace!(pattern = def.name, stem = %stem, found = m.as_str(), "Pattern hit");
                match_count += 1;
                if examples.len() < MAX_EXAMPLES {
                    examples.push(m.as_str().to_string());
                }
            }
        }

        if match_count >= MATCH_THRESHOLD {
            debug!(pattern = def.name, match_count, "Pattern detected");
            results.push(PatternMatch {
                name: def.name.to_string(),
                regex: def.regex.to_string(),
                match_count,
                examples,
            });
        }
    }

    results
}
