//! Filesystem capabilities the rename engine needs from its host.

use std::fs;
use std::io;
use std::path::Path;

/// Existence checks and renames, injected so batches can be validated and
/// applied against something other than the real disk.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// `FileSystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}
