//! Configuration for the mnemo CLI.
//!
//! Configuration lives in an optional TOML file, looked up from
//! `--config`, `$MNEMO_CONFIG`, or `~/.mnemo/config.toml` in that order.
//! A missing file means defaults; the tool works with no setup.
//!
//! ```toml
//! # data_dir = "/home/me/flashcards"
//!
//! [logging]
//! level = "warn"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Logging settings from the `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Default filter level for stderr output
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the flashcard database (default: `~/.mnemo`)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::Config(format!("TOML parse error: {e}")))
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from an explicit path, `$MNEMO_CONFIG`, or the default
    /// location. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match env::var("MNEMO_CONFIG") {
                Ok(path) => PathBuf::from(path),
                Err(_) => default_config_path()?,
            },
        };
        if path.exists() { Self::from_file(&path) } else { Ok(Self::default()) }
    }

    /// Resolved data directory: `$MNEMO_DATA_DIR` beats the config file,
    /// which beats `~/.mnemo`.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Ok(dir) = env::var("MNEMO_DATA_DIR") {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        Ok(home_dir()?.join(".mnemo"))
    }

    /// Path of the SQLite database file inside the data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("flashcards.db"))
    }

    /// Example config.toml content
    pub fn example() -> &'static str {
        r#"# mnemo configuration
# data_dir = "/home/me/flashcards"

[logging]
level = "warn"
"#
    }
}

fn default_config_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(".mnemo").join("config.toml"))
}

fn home_dir() -> Result<PathBuf> {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .map_err(|_| Error::Config("could not determine home directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
data_dir = "/tmp/cards"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/cards")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_fields() {
        let result = Config::from_toml_str("unknown_key = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = Config::from_toml_str("not toml at all [");
        assert!(result.is_err());
    }

    #[test]
    fn test_example_parses() {
        let config = Config::from_toml_str(Config::example()).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(&temp.path().join("config.toml"))).unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_load_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/cards\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/cards")));
    }

    #[test]
    fn test_db_path_uses_configured_data_dir() {
        let config = Config { data_dir: Some(PathBuf::from("/tmp/cards")), ..Config::default() };
        if env::var("MNEMO_DATA_DIR").is_err() {
            assert_eq!(config.db_path().unwrap(), PathBuf::from("/tmp/cards/flashcards.db"));
        }
    }
}
