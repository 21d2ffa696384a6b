pub mod cli;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod history;
pub mod logging;
pub mod naming;
pub mod operations;
pub mod output;
pub mod parser;
pub mod patterns;
pub mod progress;
pub mod rename;
pub mod scanner;
pub mod validator;

pub use error::{AppError, ExitCode};
pub use filesystem::{FileSystem, OsFileSystem};
pub use history::{UndoEntry, UndoReport};
pub use operations::{compute_new_name, Operation, OperationError, OperationSpec, Plan};
pub use parser::{
    parse_media_filename, parse_movie_filename, parse_tv_filename, MediaInfo, MovieInfo, TvInfo,
};
pub use patterns::{detect_patterns, PatternMatch};
pub use scanner::{list_files, FileEntry, FileFilter, ScannerError};
pub use validator::{validate, RenameCandidate, RenameStatus, ValidationResult};
