mod types;

pub use types::*;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::filesystem::FileSystem;
use crate::naming::{split_extension, EXTENSION_SEPARATOR};
use crate::operations::RESERVED_CHARS;

/// Longest filename accepted, in characters
pub const MAX_NAME_LEN: usize = 255;

/// Classify every candidate in a batch, preserving input order.
///
/// Duplicate targets are counted case-insensitively over the whole batch
/// before any item is classified, so every member of a duplicate group is
/// reported as a conflict.
pub fn validate(candidates: &[RenameCandidate], fs: &impl FileSystem) -> Vec<ValidationResult> {
    let mut target_counts: HashMap<String, usize> = HashMap::new();
    for candidate in candidates {
        *target_counts
            .entry(candidate.new_name.to_lowercase())
            .or_insert(0) += 1;
    }

    let results: Vec<ValidationResult> = candidates
        .iter()
        .map(|candidate| {
            let status = classify(candidate, &target_counts, fs);
            debug!(
                original = %candidate.original_name,
                new_name = %candidate.new_name,
                %status,
                "Classified rename"
            );
            ValidationResult {
                candidate: candidate.clone(),
                status,
            }
        })
        .collect();

    let summary = ValidationSummary::from_results(&results);
    info!(
        ok = summary.ok,
        no_change = summary.no_change,
        conflict = summary.conflict,
        invalid = summary.invalid,
        "Validation complete"
    );

    results
}

fn classify(
    candidate: &RenameCandidate,
    target_counts: &HashMap<String, usize>,
    fs: &impl FileSystem,
) -> RenameStatus {
    let new_name = candidate.new_name.as_str();
    let (stem, _) = split_extension(new_name);

    if new_name == candidate.original_name {
        return RenameStatus::NoChange;
    }

    if stem.trim_end_matches(EXTENSION_SEPARATOR).is_empty() {
        return RenameStatus::Invalid(InvalidReason::EmptyName);
    }

    if new_name.chars().count() > MAX_NAME_LEN {
        return RenameStatus::Invalid(InvalidReason::NameTooLong);
    }

    // Only the stem is checked; the extension passes through as-is
    if stem.contains(RESERVED_CHARS) {
        return RenameStatus::Invalid(InvalidReason::IllegalCharacters);
    }

    let folded = new_name.to_lowercase();
    if target_counts.get(&folded).copied().unwrap_or(0) > 1 {
        return RenameStatus::Conflict;
    }

    // A case-only rename finds itself on case-insensitive filesystems
    let case_only = folded == candidate.original_name.to_lowercase();
    if !case_only && fs.exists(&candidate.target_path()) {
        return RenameStatus::Conflict;
    }

    RenameStatus::Ok
}
