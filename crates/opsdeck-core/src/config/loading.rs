//! Configuration loading and validation.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.opsdeck/config.toml`
//! 3. **Environment** - `OPSDECK_BASE_URL` overrides the base URL
//!
//! A missing config file is not an error; a malformed one is.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::ConsoleConfig;
use crate::errors::ConfigError;

/// Directory holding the config file and the persisted session token.
pub fn console_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or_else(|| ConfigError::InvalidConfiguration {
        message: "could not determine home directory".to_string(),
    })?;
    Ok(home.join(".opsdeck"))
}

/// Load configuration from the default location, applying env overrides.
pub fn load() -> Result<ConsoleConfig, ConfigError> {
    let path = console_dir()?.join("config.toml");
    let mut config = match load_file(&path) {
        Ok(config) => config,
        Err(ConfigError::ConfigNotFound { .. }) => ConsoleConfig::default(),
        Err(e) => return Err(e),
    };

    if let Ok(url) = std::env::var("OPSDECK_BASE_URL")
        && !url.is_empty()
    {
        config.base_url = url;
    }

    validate(&config)?;
    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_file(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("{}: {}", path.display(), e),
    })
}

/// Validate the final configuration.
pub fn validate(config: &ConsoleConfig) -> Result<(), ConfigError> {
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
        });
    }
    if config.refresh.interval_secs == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "refresh.interval_secs must be at least 1".to_string(),
        });
    }
    if config.login.max_attempts == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "login.max_attempts must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_file_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [not toml").unwrap();
        let result = load_file(&path);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"https://ops.example.net\"\n").unwrap();
        let config = load_file(&path).unwrap();
        assert_eq!(config.base_url, "https://ops.example.net");
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = ConsoleConfig {
            base_url: "ws://wrong".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = ConsoleConfig::default();
        config.refresh.interval_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }
}
