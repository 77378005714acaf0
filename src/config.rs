//! calgrid configuration.

use std::path::{Path, PathBuf};

use calgrid_core::{CalGridError, CalGridResult};
use config::{Config, Environment as EnvSource, File};
use serde::Deserialize;

use crate::persistence::DEFAULT_STORAGE_KEY;

static DEFAULT_STORAGE_DIR: &str = "~/.local/share/calgrid";
static DEFAULT_LOG_FILTER: &str = "info";
const ENV_PREFIX: &str = "CALGRID";

fn default_storage_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_DIR)
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Configuration at ~/.config/calgrid/config.toml, overridable through
/// `CALGRID_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Where file-backed storage keeps its blobs
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Fallback `tracing` filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_dir: default_storage_dir(),
            storage_key: default_storage_key(),
            log_filter: default_log_filter(),
        }
    }
}

impl StoreConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, creating a commented default on first use.
    pub fn load() -> CalGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file; a missing file means defaults.
    pub fn load_from(path: &Path) -> CalGridResult<Self> {
        Self::build(path, EnvSource::with_prefix(ENV_PREFIX))
    }

    fn build(path: &Path, env: EnvSource) -> CalGridResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| CalGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalGridError::Config(e.to_string()))
    }

    #[cfg(test)]
    fn load_with_env(path: &Path, vars: config::Map<String, String>) -> CalGridResult<Self> {
        Self::build(path, EnvSource::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    /// `storage_dir` with `~` expanded.
    pub fn storage_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.storage_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalGridResult<()> {
        let contents = format!(
            "\
# calgrid configuration

# Where stored events live:
# storage_dir = \"{}\"

# Storage key of the event collection:
# storage_key = \"{}\"

# Log filter used when RUST_LOG is not set:
# log_filter = \"{}\"
",
            DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_KEY, DEFAULT_LOG_FILTER
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::load_with_env(&dir.path().join("none.toml"), Map::new()).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.storage_key, "calendar_events");
    }

    #[test]
    fn test_default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calgrid/config.toml");

        StoreConfig::create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = StoreConfig::load_with_env(&path, Map::new()).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_file_values_and_env_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "storage_dir = \"/var/lib/calgrid\"\nstorage_key = \"events\"\n").unwrap();

        let mut vars = Map::new();
        vars.insert("CALGRID_LOG_FILTER".to_string(), "calgrid=debug".to_string());

        let config = StoreConfig::load_with_env(&path, vars).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/calgrid"));
        assert_eq!(config.storage_key, "events");
        assert_eq!(config.log_filter, "calgrid=debug");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "storage_dir = [not toml").unwrap();

        assert!(matches!(
            StoreConfig::load_with_env(&path, Map::new()),
            Err(CalGridError::Config(_))
        ));
    }

    #[test]
    fn test_storage_path_expands_tilde() {
        let config = StoreConfig {
            storage_dir: PathBuf::from("/srv/calgrid"),
            ..Default::default()
        };
        assert_eq!(config.storage_path(), PathBuf::from("/srv/calgrid"));

        let home_relative = StoreConfig::default().storage_path();
        assert!(!home_relative.to_string_lossy().starts_with('~'));
    }
}
