use std::path::Path;

use tracing::{debug, info, warn};

use crate::filesystem::FileSystem;
use crate::progress::Progress;

use super::types::*;

/// Rename every ledger entry's new name back to its old name.
///
/// Missing files are skipped and counted. Any other failure is recorded and
/// the remaining entries are still processed; nothing is rolled back.
pub fn reverse(
    folder: &Path,
    entries: &[UndoEntry],
    fs: &impl FileSystem,
    progress: &mut Progress,
) -> UndoReport {
    let mut report = UndoReport::default();
    let total = entries.len();

    info!(folder = %folder.display(), total, "Reversing undo ledger");

    for (i, entry) in entries.iter().enumerate() {
        let current_path = folder.join(&entry.new);
        let revert_path = folder.join(&entry.old);

        debug!(from = %entry.new, to = %entry.old, "Checking revert");

        if !fs.exists(&current_path) {
            warn!(file = %entry.new, "Renamed file no longer exists, skipping");
            report.skipped_missing += 1;
            continue;
        }

        // Don't clobber a different file that now holds the old name
        let case_only = entry.old.to_lowercase() == entry.new.to_lowercase();
        if !case_only && fs.exists(&revert_path) {
            let reason = format!("'{}' already exists", entry.old);
            progress.warn(&format!("Cannot restore '{}': {}", entry.new, reason));
            report.failed.push(UndoFailure {
                entry: entry.clone(),
                reason,
            });
            continue;
        }

        progress.undo_progress(i + 1, total, &entry.new, &entry.old);

        match fs.rename(&current_path, &revert_path) {
            Ok(()) => {
                info!("Reverted: {} -> {}", entry.new, entry.old);
                report.restored.push(entry.clone());
            }
            Err(e) => {
                progress.warn(&format!("Failed to restore '{}': {}", entry.new, e));
                report.failed.push(UndoFailure {
                    entry: entry.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        restored = report.restored.len(),
        skipped = report.skipped_missing,
        failed = report.failed.len(),
        "Undo complete"
    );

    report
}
