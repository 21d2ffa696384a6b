use serde::Deserialize;
use std::path::PathBuf;

/// Settings read from `renametool.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder used when the command line names none
    pub default_folder: Option<PathBuf>,

    /// Extension filter used when `--ext` is absent
    pub default_extension_filter: Option<String>,

    /// Names never listed, matched case-insensitively
    pub excluded_files: Vec<String>,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,

    /// File the settings were read from, if any was found
    pub path: Option<PathBuf>,

    /// Set when a file was found but could not be used
    pub warning: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config: {0}")]
    ReadError(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),
}
