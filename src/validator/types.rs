use std::fmt;
use std::path::PathBuf;

/// One file and the name the plan produced for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCandidate {
    /// Full path to the existing file
    pub original_path: PathBuf,
    /// Current filename
    pub original_name: String,
    /// Proposed filename
    pub new_name: String,
}

impl RenameCandidate {
    pub fn new(original_path: PathBuf, new_name: String) -> Self {
        let original_name = original_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            original_path,
            original_name,
            new_name,
        }
    }

    /// Path the file would have after the rename
    pub fn target_path(&self) -> PathBuf {
        self.original_path
            .parent()
            .map(|p| p.join(&self.new_name))
            .unwrap_or_else(|| PathBuf::from(&self.new_name))
    }
}

/// Why a candidate name cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    EmptyName,
    NameTooLong,
    IllegalCharacters,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            InvalidReason::EmptyName => "empty name",
            InvalidReason::NameTooLong => "name too long",
            InvalidReason::IllegalCharacters => "illegal characters",
        };
        f.write_str(reason)
    }
}

/// Classification of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStatus {
    Ok,
    NoChange,
    Conflict,
    Invalid(InvalidReason),
}

impl RenameStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, RenameStatus::Ok)
    }
}

impl fmt::Display for RenameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameStatus::Ok => f.write_str("OK"),
            RenameStatus::NoChange => f.write_str("NO CHANGE"),
            RenameStatus::Conflict => f.write_str("CONFLICT"),
            RenameStatus::Invalid(reason) => write!(f, "INVALID ({})", reason),
        }
    }
}

/// A candidate with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub candidate: RenameCandidate,
    pub status: RenameStatus,
}

impl ValidationResult {
    pub fn original_name(&self) -> &str {
        &self.candidate.original_name
    }

    pub fn new_name(&self) -> &str {
        &self.candidate.new_name
    }
}

/// Tally of statuses across a validated batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub ok: usize,
    pub no_change: usize,
    pub conflict: usize,
    pub invalid: usize,
}

impl ValidationSummary {
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result.status {
                RenameStatus::Ok => summary.ok += 1,
                RenameStatus::NoChange => summary.no_change += 1,
                RenameStatus::Conflict => summary.conflict += 1,
                RenameStatus::Invalid(_) => summary.invalid += 1,
            }
        }
        summary
    }

    pub fn skipped(&self) -> usize {
        self.no_change + self.conflict + self.invalid
    }
}
