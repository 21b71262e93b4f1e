//! Configuration for a migration run
//!
//! Settings come from a TOML file (`photo-migrate.toml` by default) with
//! `PHOTO_MIGRATE_*` environment variables taking precedence. The four
//! required options are the two photo directories and the two connection
//! strings; an optional `[database]` table tunes the connection pools.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use settings::{MigrationSettings, SettingsFile};

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required setting `{0}`")]
    MissingField(&'static str),

    #[error("invalid value for `{field}`: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    #[error("`{field}` does not point to a directory: {}", .path.display())]
    DirectoryNotFound { field: &'static str, path: PathBuf },
}
