pub mod types;

use crate::error::{ConfigError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".traefik-validate.toml";

/// Get the global config file path (~/.traefik-validate.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (<directory>/.traefik-validate.toml)
pub fn local_config_path(directory: &Path) -> PathBuf {
    directory.join(CONFIG_FILE_NAME)
}

/// Read and parse one config file.
pub fn read_config(path: &Path) -> std::result::Result<types::Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration from file or use defaults.
///
/// An explicit path must load. Otherwise the local config is tried first,
/// then the global one; broken files there are skipped with a warning.
pub fn load_config(explicit: Option<&Path>, directory: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return Ok(read_config(path)?);
    }

    let candidates = directory
        .map(local_config_path)
        .into_iter()
        .chain(global_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match read_config(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => warn!("Ignoring config file: {}", e),
        }
    }

    debug!("No config file found, using defaults");
    Ok(types::Config::default())
}
