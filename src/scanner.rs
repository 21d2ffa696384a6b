use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::naming::split_extension;
use crate::operations::normalize_extension;

/// System files that are never offered for renaming
const HIDDEN_NAMES: &[&str] = &["desktop.ini", "thumbs.db"];

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// Which files a listing should keep
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Keep only files with this extension (case-insensitive, dot optional)
    pub extension: Option<String>,

    /// Names to leave out (case-insensitive)
    pub excluded_names: Vec<String>,
}

impl FileFilter {
    fn accepts(&self, name: &str) -> bool {
        let folded = name.to_lowercase();

        if name.starts_with('.') || HIDDEN_NAMES.contains(&folded.as_str()) {
            trace!(name, "Skipping hidden file");
            return false;
        }

        if self
            .excluded_names
            .iter()
            .any(|excluded| excluded.to_lowercase() == folded)
        {
            trace!(name, "Skipping excluded file");
            return false;
        }

        match self.extension.as_deref().map(normalize_extension) {
            Some(wanted) if !wanted.is_empty() => {
                let (_, ext) = split_extension(name);
                ext.to_lowercase() == wanted.to_lowercase()
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// List the regular files in `folder` that pass `filter`, sorted by name
/// ignoring case.
pub fn list_files(folder: &Path, filter: &FileFilter) -> Result<Vec<FileEntry>, ScannerError> {
    debug!(path = ?folder, "Listing files");

    if !folder.exists() {
        return Err(ScannerError::PathNotFound(folder.to_path_buf()));
    }

    if !folder.is_dir() {
        return Err(ScannerError::NotADirectory(folder.to_path_buf()));
    }

    let read_dir = fs::read_dir(folder).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(folder.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let mut entries = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        let metadata = match fs::metadata(&path) {
            Ok(m) if m.is_file() => m,
            _ => {
                trace!(path = ?path, "Skipping non-file");
                continue;
            }
        };

        let name = match path.file_name().map(|n| n.to_str()) {
            Some(Some(n)) => n.to_string(),
            Some(None) => {
                warn!(path = ?path, "Skipping file with a non-UTF-8 name");
                continue;
            }
            None => continue,
        };

        if !filter.accepts(&name) {
            continue;
        }

        entries.push(FileEntry {
            name,
            path,
            size: metadata.len(),
        });
    }

    entries.sort_by_key(|e| e.name.to_lowercase());

    debug!(count = entries.len(), "Listing complete");

    Ok(entries)
}
