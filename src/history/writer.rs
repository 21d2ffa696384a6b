use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::validator::ValidationResult;

use super::types::*;

const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Persist the undo ledger for `folder`, replacing any previous one.
pub fn record(folder: &Path, entries: &[UndoEntry]) -> Result<PathBuf, HistoryError> {
    let path = folder.join(UNDO_FILE);
    // Write to temporary file first
    let temp_path = path.with_extension("json.tmp");

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
    }

    // Atomic rename
    fs::rename(&temp_path, &path)?;

    info!(path = %path.display(), entries = entries.len(), "Undo ledger written");

    Ok(path)
}

/// Delete the undo ledger for `folder`. A missing ledger is not an error.
pub fn clear(folder: &Path) -> Result<(), HistoryError> {
    let path = folder.join(UNDO_FILE);
    match fs::remove_file(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "Undo ledger cleared");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Append one session block for `results` to the folder's audit log.
pub fn write_log(folder: &Path, results: &[ValidationResult]) -> Result<PathBuf, HistoryError> {
    write_log_at(folder, results, Local::now().naive_local())
}

pub fn write_log_at(
    folder: &Path,
    results: &[ValidationResult],
    timestamp: NaiveDateTime,
) -> Result<PathBuf, HistoryError> {
    let path = folder.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "=== {} ===", timestamp.format(LOG_TIMESTAMP_FORMAT))?;
    for result in results {
        writeln!(
            writer,
            "{} -> {} [{}]",
            result.original_name(),
            result.new_name(),
            result.status
        )?;
    }
    writeln!(writer)?;
    writer.flush()?;

    debug!(path = %path.display(), items = results.len(), "Audit log appended");

    Ok(path)
}
