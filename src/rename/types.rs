use std::path::PathBuf;

use crate::history::UndoEntry;
use crate::operations::{MediaKind, OperationError, Plan};

#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("Cannot read plan file {path}: {source}")]
    PlanRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid plan file {path}: {source}")]
    PlanParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// A media suggestion that did not match one of the selected files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMiss {
    pub kind: MediaKind,
    pub file: String,
}

/// A plan ready to run, plus the files media suggestions could not parse
#[derive(Debug, Clone, Default)]
pub struct PlanBuild {
    pub plan: Plan,
    pub misses: Vec<MediaMiss>,
}

/// An OK rename that failed on disk
#[derive(Debug, Clone)]
pub struct ApplyFailure {
    pub original: String,
    pub new_name: String,
    pub reason: String,
}

/// Result of applying a validated batch
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Renames that succeeded, in apply order
    pub renamed: Vec<UndoEntry>,
    pub failed: Vec<ApplyFailure>,
}

impl ApplyReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
