mod types;

pub use types::*;

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::filesystem::FileSystem;
use crate::history::UndoEntry;
use crate::operations::{compute_new_name, MediaKind, Operation, OperationSpec, StepSpec};
use crate::parser::{parse_movie_filename, parse_tv_filename};
use crate::progress::Progress;
use crate::scanner::FileEntry;
use crate::validator::{RenameCandidate, ValidationResult};

/// Read a JSON plan file: an array of operation specs.
pub fn read_plan_file(path: &Path) -> Result<Vec<OperationSpec>, RenameError> {
    let content = fs::read_to_string(path).map_err(|source| RenameError::PlanRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RenameError::PlanParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn command-line steps into a plan for `files`.
///
/// Each media suggestion becomes one file-tagged media operation per file
/// that parses; files that don't parse are returned as misses.
pub fn build_plan(steps: &[StepSpec], files: &[FileEntry]) -> Result<PlanBuild, RenameError> {
    let mut build = PlanBuild::default();

    for step in steps {
        match step {
            StepSpec::Op(spec) => build.plan.push(Operation::from_spec(spec)?),
            StepSpec::Media(kind) => expand_media(*kind, files, &mut build),
        }
    }

    debug!(
        operations = build.plan.len(),
        misses = build.misses.len(),
        "Plan built"
    );

    Ok(build)
}

fn expand_media(kind: MediaKind, files: &[FileEntry], build: &mut PlanBuild) {
    for entry in files {
        let file = Some(entry.name.clone());
        let op = match kind {
            MediaKind::Tv => {
                parse_tv_filename(&entry.name).map(|info| Operation::MediaTv { info, file })
            }
            MediaKind::Movie => {
                parse_movie_filename(&entry.name).map(|info| Operation::MediaMovie { info, file })
            }
        };

        match op {
            Some(op) => build.plan.push(op),
            None => {
                debug!(file = %entry.name, %kind, "No media match");
                build.misses.push(MediaMiss {
                    kind,
                    file: entry.name.clone(),
                });
            }
        }
    }
}

/// Keep only the files named in `selection`; an empty selection keeps all.
///
/// Returns the kept files in listing order and any selected names that were
/// not found.
pub fn select_files(files: Vec<FileEntry>, selection: &[String]) -> (Vec<FileEntry>, Vec<String>) {
    if selection.is_empty() {
        return (files, Vec::new());
    }

    let missing = selection
        .iter()
        .filter(|name| !files.iter().any(|f| &f.name == *name))
        .cloned()
        .collect();

    let kept = files
        .into_iter()
        .filter(|f| selection.contains(&f.name))
        .collect();

    (kept, missing)
}

/// Run the plan over every file, in order.
pub fn build_candidates(files: &[FileEntry], plan: &[Operation]) -> Vec<RenameCandidate> {
    files
        .iter()
        .map(|entry| RenameCandidate::new(entry.path.clone(), compute_new_name(&entry.name, plan)))
        .collect()
}

/// Rename every OK item in input order.
///
/// A failed rename is reported and the rest of the batch still runs.
pub fn apply_batch(
    results: &[ValidationResult],
    fs: &impl FileSystem,
    progress: &mut Progress,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    let approved: Vec<&ValidationResult> = results.iter().filter(|r| r.status.is_ok()).collect();
    let total = approved.len();

    info!(total, "Applying renames");

    for (i, result) in approved.into_iter().enumerate() {
        let candidate = &result.candidate;
        progress.rename_progress(i + 1, total, &candidate.original_name, &candidate.new_name);

        match fs.rename(&candidate.original_path, &candidate.target_path()) {
            Ok(()) => {
                info!("Renamed: {} -> {}", candidate.original_name, candidate.new_name);
                report
                    .renamed
                    .push(UndoEntry::new(&candidate.original_name, &candidate.new_name));
            }
            Err(e) => {
                warn!(file = %candidate.original_name, error = %e, "Rename failed");
                progress.warn(&format!(
                    "Failed to rename '{}' to '{}': {}",
                    candidate.original_name, candidate.new_name, e
                ));
                report.failed.push(ApplyFailure {
                    original: candidate.original_name.clone(),
                    new_name: candidate.new_name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
