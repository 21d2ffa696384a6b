use serde::{Deserialize, Serialize};

/// Undo ledger filename, stored in the renamed folder
pub const UNDO_FILE: &str = ".renametool_undo.json";

/// Audit log filename, stored in the renamed folder
pub const LOG_FILE: &str = ".renametool.log";

/// Error types for ledger and log persistence
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to write history file: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to serialize undo ledger: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// One applied rename, as persisted in the undo ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    /// Name before the rename
    pub old: String,

    /// Name the file was renamed to
    pub new: String,
}

impl UndoEntry {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// An undo entry that could not be reversed
#[derive(Debug, Clone)]
pub struct UndoFailure {
    pub entry: UndoEntry,
    pub reason: String,
}

/// Outcome of reversing a ledger
#[derive(Debug, Default)]
pub struct UndoReport {
    pub restored: Vec<UndoEntry>,

    /// Entries whose renamed file no longer exists
    pub skipped_missing: usize,

    pub failed: Vec<UndoFailure>,
}

impl UndoReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
