use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, warn};

use super::types::*;

/// Load the undo ledger for `folder`.
///
/// A missing ledger and an unreadable one are both reported as `None`.
pub fn load(folder: &Path) -> Option<Vec<UndoEntry>> {
    let path = folder.join(UNDO_FILE);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No undo ledger");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cannot open undo ledger");
            return None;
        }
    };

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(entries) => Some(entries),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring corrupt undo ledger");
            None
        }
    }
}
