use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Fatal errors that abort a migration run
///
/// Per-record problems never surface here; they are logged and recorded in
/// the run report instead.
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Storage error ({store} store): {message}")]
    Storage {
        code: u16,
        message: String,
        store: &'static str,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MigrateError {
    /// Wrap a storage failure from the named store
    pub fn storage(store: &'static str, err: StorageError) -> Self {
        let code = match &err {
            StorageError::Connection(_) => ErrorCode::STORAGE_CONNECTION_FAILED,
            StorageError::Database(_) => ErrorCode::STORAGE_QUERY_FAILED,
            StorageError::Decode(_) => ErrorCode::STORAGE_CORRUPTED,
            StorageError::Configuration(_) => ErrorCode::STORAGE_BACKEND_ERROR,
        };
        Self::Storage {
            code,
            message: err.to_string(),
            store,
            source: Some(Box::new(err)),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Storage { .. } => 4,
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. } | Self::Storage { code, .. } => *code,
        }
    }

    /// Message suitable for end users
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Storage { message, store, .. } => {
                format!("Could not use the {} database: {}", store, message)
            }
        }
    }

    /// Full message including the error code description
    pub fn developer_message(&self) -> String {
        format!("{} ({})", self, describe_error_code(self.code()))
    }
}

impl From<ConfigError> for MigrateError {
    fn from(err: ConfigError) -> Self {
        let code = match &err {
            ConfigError::Read { .. } => ErrorCode::CONFIG_NOT_FOUND,
            ConfigError::Parse { .. } => ErrorCode::CONFIG_PARSE_ERROR,
            ConfigError::MissingField(_) => ErrorCode::CONFIG_MISSING_REQUIRED,
            ConfigError::InvalidValue { .. } => ErrorCode::CONFIG_INVALID_VALUE,
            ConfigError::DirectoryNotFound { .. } => ErrorCode::CONFIG_PATH_ERROR,
        };
        Self::Config {
            code,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: MigrateError = ConfigError::MissingField("source_directory").into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.code(), ErrorCode::CONFIG_MISSING_REQUIRED);
        assert!(err.to_string().starts_with("[E1004] Configuration error"));
        assert!(err.user_message().contains("source_directory"));
    }

    #[test]
    fn test_storage_error_conversion() {
        let err = MigrateError::storage("source", StorageError::connection("refused"));
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.code(), ErrorCode::STORAGE_CONNECTION_FAILED);
        assert!(err.user_message().contains("source database"));
        assert!(err
            .developer_message()
            .contains("Could not connect to the database"));
    }

    #[test]
    fn test_source_chain_is_kept() {
        use std::error::Error as _;

        let err = MigrateError::storage("destination", StorageError::database("syntax"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Database error: syntax");
    }
}
