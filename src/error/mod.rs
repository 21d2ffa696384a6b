mod codes;

pub use codes::ExitCode;

use crate::config::ConfigError;
use crate::operations::OperationError;
use crate::rename::RenameError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Unknown files selected: {}", .names.join(", "))]
    UnknownSelection { names: Vec<String> },

    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },

    #[error("History file error: {message}")]
    HistoryError {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("{failed} of {attempted} {action} failed")]
    RenameError {
        action: &'static str,
        failed: usize,
        attempted: usize,
    },

    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::UnknownSelection { .. } => ExitCode::InvalidArguments,
            AppError::InvalidOperation { .. } => ExitCode::InvalidOperation,
            AppError::HistoryError { .. } => ExitCode::HistoryError,
            AppError::RenameError { .. } => ExitCode::RenameError,
            AppError::ConfigError { .. } => ExitCode::ConfigError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::UnknownSelection { names } => {
                let mut msg = String::from("These selected files are not in the folder listing:\n");
                for name in names.iter().take(10) {
                    msg.push_str(&format!("  - {}\n", name));
                }
                if names.len() > 10 {
                    msg.push_str(&format!("  ... and {} more\n", names.len() - 10));
                }
                msg.push_str("\nHidden, excluded and filtered-out files cannot be selected.");
                msg
            }

            AppError::InvalidOperation { message } => {
                format!(
                    "{}\n\n\
                     Operation forms:\n  \
                     replace:FIND=>REPL   regex:PATTERN=>REPL\n  \
                     prefix:TEXT          suffix:TEXT\n  \
                     case:upper|lower|title|snake\n  \
                     ext:EXT              tv | movie",
                    message
                )
            }

            AppError::HistoryError { path, message } => {
                let path_info = path
                    .as_ref()
                    .map(|p| format!("File: {}\n", p.display()))
                    .unwrap_or_default();

                format!(
                    "History file error:\n  {}\n{}\n\
                     Check that the folder is writable.",
                    message, path_info
                )
            }

            AppError::RenameError {
                action,
                failed,
                attempted,
            } => {
                format!(
                    "{} of {} {} failed.\n\n\
                     The remaining items were processed; see the warnings above.\n\
                     Check file permissions and ensure no files are open.",
                    failed, attempted, action
                )
            }

            AppError::ConfigError { message } => {
                format!(
                    "Config error: {}\n\n\
                     Pass an existing file to --config or remove the option.",
                    message
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<OperationError> for AppError {
    fn from(err: OperationError) -> Self {
        AppError::InvalidOperation {
            message: err.to_string(),
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        AppError::InvalidOperation {
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::ConfigError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = AppError::DirectoryNotFound {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::DirectoryNotFound);

        let err = AppError::RenameError {
            action: "renames",
            failed: 1,
            attempted: 3,
        };
        assert_eq!(err.exit_code(), ExitCode::RenameError);

        let err = AppError::PermissionDenied {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::PermissionError);
    }

    #[test]
    fn test_detailed_message_includes_context() {
        let err = AppError::UnknownSelection {
            names: vec!["file1.txt".to_string(), "file2.txt".to_string()],
        };

        let msg = err.detailed_message();
        assert!(msg.contains("file1.txt"));
        assert!(msg.contains("file2.txt"));
    }

    #[test]
    fn test_rename_error_message() {
        let err = AppError::RenameError {
            action: "renames",
            failed: 2,
            attempted: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 renames failed");
    }

    #[test]
    fn test_scanner_error_conversion() {
        let scanner_err = ScannerError::PathNotFound(PathBuf::from("/missing"));
        let app_err: AppError = scanner_err.into();
        assert_eq!(app_err.exit_code(), ExitCode::DirectoryNotFound);
    }

    #[test]
    fn test_operation_error_conversion() {
        let op_err = OperationError::MalformedSpec("rotate:90".to_string());
        let app_err: AppError = op_err.into();
        assert_eq!(app_err.exit_code(), ExitCode::InvalidOperation);
        assert!(app_err.detailed_message().contains("rotate:90"));
    }

    #[test]
    fn test_config_error_conversion() {
        let app_err: AppError = ConfigError::FileNotFound(PathBuf::from("/x.toml")).into();
        assert_eq!(app_err.exit_code(), ExitCode::ConfigError);
    }
}
