//! Migration settings and their validation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;
use crate::storage::DatabaseConfig;

/// Settings as read from the configuration file, every field optional
///
/// Environment variables are merged on top before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub source_directory: Option<PathBuf>,
    pub destination_directory: Option<PathBuf>,
    pub source_connection_string: Option<String>,
    pub destination_connection_string: Option<String>,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Validated settings for one migration run
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationSettings {
    pub source_directory: PathBuf,
    pub destination_directory: PathBuf,
    pub source_connection_string: String,
    pub destination_connection_string: String,
    pub database: DatabaseConfig,
}

impl SettingsFile {
    /// Check required options and turn them into [`MigrationSettings`]
    pub fn validate(self) -> Result<MigrationSettings, ConfigError> {
        let source_directory = require_path(self.source_directory, "source_directory")?;
        let destination_directory =
            require_path(self.destination_directory, "destination_directory")?;
        let source_connection_string =
            require_string(self.source_connection_string, "source_connection_string")?;
        let destination_connection_string = require_string(
            self.destination_connection_string,
            "destination_connection_string",
        )?;

        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(MigrationSettings {
            source_directory,
            destination_directory,
            source_connection_string,
            destination_connection_string,
            database: self.database,
        })
    }
}

impl MigrationSettings {
    /// Ensure both photo directories exist
    ///
    /// Run before any store is opened so a typo never costs a database scan.
    pub fn check_directories(&self) -> Result<(), ConfigError> {
        for (field, dir) in [
            ("source_directory", &self.source_directory),
            ("destination_directory", &self.destination_directory),
        ] {
            if !dir.is_dir() {
                return Err(ConfigError::DirectoryNotFound {
                    field,
                    path: dir.clone(),
                });
            }
        }
        Ok(())
    }
}

fn require_path(value: Option<PathBuf>, field: &'static str) -> Result<PathBuf, ConfigError> {
    match value {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(ConfigError::MissingField(field)),
    }
}

fn require_string(value: Option<String>, field: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ConfigError::MissingField(field)),
    }
}
