//! # CLI Error Type
//!
//! Everything that can go wrong outside the checkout domain, plus the domain
//! errors themselves passed through untouched.
//!
//! ```text
//! CoreError ──────────┐
//! std::io::Error ─────┤
//! toml::de::Error ────┼──► CliError ──► anyhow (main) ──► exit status 1
//! serde_json::Error ──┘
//! ```

use thiserror::Error;
use till_core::CoreError;

/// Errors surfaced by the `till` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A config file or environment value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a config or store file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config or store file is not valid TOML for its schema.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Writing JSON output failed.
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A store file entry failed validation.
    #[error("Store entry {index} ({code}): {source}")]
    InvalidEntry {
        index: usize,
        code: String,
        #[source]
        source: CoreError,
    },

    /// A checkout rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
