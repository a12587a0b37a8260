use std::path::{Path, PathBuf};

use super::parsers;
use super::types::{CONFIG_FILES, Config, ConfigError};

/// Prevent infinite traversal on odd filesystems
const MAX_DEPTH: usize = 100;

impl Config {
    /// Load configuration from an explicit file.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let display_path = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            source: e,
            path: display_path.clone(),
        })?;
        log::debug!("[glossort-config] Loading config file: {display_path}");
        parsers::parse_glossort_toml(&content, &display_path)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path wins; otherwise, unless `discover` is false, the
    /// nearest config file above the current directory is used. Returns the
    /// config together with the file it came from, if any.
    pub fn load(explicit: Option<&Path>, discover: bool) -> Result<(Config, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }
        if !discover {
            log::debug!("[glossort-config] Discovery disabled, using defaults");
            return Ok((Config::default(), None));
        }

        let start_dir = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                log::debug!("[glossort-config] Failed to get current directory: {e}");
                return Ok((Config::default(), None));
            }
        };

        match discover_config_upward(&start_dir) {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => {
                log::debug!("[glossort-config] No config file found, using defaults");
                Ok((Config::default(), None))
            }
        }
    }
}

/// Walk up from `start_dir` looking for a config file.
///
/// The walk stops at the first directory containing `.git`, after checking
/// that directory itself.
pub fn discover_config_upward(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();

    for _ in 0..MAX_DEPTH {
        log::debug!("[glossort-config] Searching for config in: {}", current_dir.display());

        for config_name in CONFIG_FILES {
            let config_path = current_dir.join(config_name);
            if config_path.is_file() {
                log::debug!("[glossort-config] Found config file: {}", config_path.display());
                return Some(config_path);
            }
        }

        if current_dir.join(".git").exists() {
            log::debug!("[glossort-config] Reached repository root at: {}", current_dir.display());
            return None;
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }

    log::debug!("[glossort-config] Maximum traversal depth reached");
    None
}
