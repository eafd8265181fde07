use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("tasklist").join("config.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read and parse a config file. The file must exist.
pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&text).map_err(|e| {
        warn!(path = %path.display(), "config parse failed");
        ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load the config for this run.
///
/// An explicit path must exist. The default location is optional: when no
/// file is there, defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config_from(path),
        None => {
            let path = config_path();
            if path.exists() {
                read_config_from(&path)
            } else {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "[behavior]\nconfirm_multi_delete = false\n\n[ui]\nshow_key_hints = false\n",
        )
        .unwrap();

        let config = read_config_from(&path).unwrap();
        assert!(config.behavior.confirm_exit);
        assert!(!config.behavior.confirm_multi_delete);
        assert!(!config.ui.show_key_hints);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[behavior\nconfirm_exit = ").unwrap();
        let err = read_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[behavior]\nconfirm_exit = \"yes\"\n").unwrap();
        assert!(read_config_from(&path).is_err());
    }
}
