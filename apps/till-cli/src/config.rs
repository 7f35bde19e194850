//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --store ./store.toml                                               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TILL_STORE_FILE=./store.toml                                       │
//! │     TILL_LOG=debug                                                     │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or ~/.config/till/till.toml (Linux)                 │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     store.toml in the working directory, "warn,till=info"              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! path = "/srv/till/store.toml"
//!
//! [log]
//! filter = "info,till_core=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

pub const ENV_STORE_FILE: &str = "TILL_STORE_FILE";
pub const ENV_LOG: &str = "TILL_LOG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TillConfig {
    pub store: StoreConfig,
    pub log: LogConfig,
}

/// Where the catalog and price list come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: PathBuf::from("store.toml"),
        }
    }
}

/// Log filter in `EnvFilter` syntax. `RUST_LOG` still wins when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "warn,till=info".to_string(),
        }
    }
}

impl TillConfig {
    /// Loads configuration from file, then applies environment overrides.
    ///
    /// An explicit `config_path` must exist; the platform default path is
    /// optional.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &std::path::Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.store.path.as_os_str().is_empty() {
            return Err(CliError::InvalidConfig("store.path must not be empty".into()));
        }

        if self.log.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig("log.filter must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Split out so tests do not have
    /// to touch the process environment.
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_STORE_FILE) {
            debug!(path = %path, "Overriding store path from environment");
            self.store.path = PathBuf::from(path);
        }

        if let Some(filter) = lookup(ENV_LOG) {
            debug!(filter = %filter, "Overriding log filter from environment");
            self.log.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "till", "till")
            .map(|dirs| dirs.config_dir().join("till.toml"))
    }
}
