//! TOML configuration for sprint defaults and logging.
//!
//! The default file lives at `<config_dir>/burndown/config.toml`. A missing
//! default file is not an error; an explicit `--config` path that doesn't
//! exist is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Could not determine the user's config directory.
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sprint: SprintConfig,
    pub log: LogConfig,
}

/// `[sprint]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SprintConfig {
    /// Sprint length used when no end date is given.
    pub length_days: u32,
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self { length_days: 14 }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. "info" or "burndown=debug".
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("burndown")
            .join("config.toml"))
    }

    /// Load from `explicit` if given, otherwise from the default path.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::default_path()?;
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };
        let raw = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadFile { path: path.clone(), source })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.sprint.length_days, 14);
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let cfg = Config::from_toml_str("[sprint]\nlength_days = 10\n").unwrap();
        assert_eq!(cfg.sprint.length_days, 10);
        assert_eq!(cfg.log, LogConfig::default());

        let cfg = Config::from_toml_str("[log]\nfile = \"/tmp/bd.log\"\n").unwrap();
        assert_eq!(cfg.log.file.as_deref(), Some(Path::new("/tmp/bd.log")));
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[sprint]\nlength_days = \"two weeks\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml(_)));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let path = std::env::temp_dir().join("burndown-no-such-config.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join(format!("burndown-cfg-{}.toml", std::process::id()));
        std::fs::write(&path, "[sprint]\nlength_days = 7\n[log]\nlevel = \"debug\"\n").unwrap();
        let cfg = Config::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.sprint.length_days, 7);
        assert_eq!(cfg.log.level, "debug");
    }
}
