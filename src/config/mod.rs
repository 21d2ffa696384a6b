mod types;

pub use types::*;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "renametool.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "RENAMETOOL_CONFIG";

const CONFIG_DIR_NAME: &str = "renametool";

/// Resolve and load the configuration.
///
/// An explicit path must exist. Otherwise the first existing file among
/// `$RENAMETOOL_CONFIG`, `./renametool.toml` and the user config directory is
/// used, and no file at all means defaults.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        return Ok(load_file(path));
    }

    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    match discover(env_path, dirs::config_dir()) {
        Some(path) => Ok(load_file(&path)),
        None => {
            debug!("No config file found, using defaults");
            Ok(LoadedConfig::default())
        }
    }
}

/// Load configuration from a TOML string
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn discover(env_path: Option<PathBuf>, user_config_dir: Option<PathBuf>) -> Option<PathBuf> {
    env_path
        .into_iter()
        .chain(std::iter::once(PathBuf::from(CONFIG_FILE)))
        .chain(user_config_dir.map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE)))
        .find(|path| path.is_file())
}

fn load_file(path: &Path) -> LoadedConfig {
    let loaded = fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(e.to_string()))
        .and_then(|content| load_config_from_str(&content));

    match loaded {
        Ok(config) => {
            debug!(path = %path.display(), ?config, "Config loaded");
            LoadedConfig {
                config,
                path: Some(path.to_path_buf()),
                warning: None,
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unusable config file");
            LoadedConfig {
                config: Config::default(),
                path: Some(path.to_path_buf()),
                warning: Some(format!("Ignoring config {}: {}", path.display(), e)),
            }
        }
    }
}
