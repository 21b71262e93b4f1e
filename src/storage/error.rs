//! Error types for the storage layer

use std::fmt;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Query or statement failed
    #[error("Database error: {0}")]
    Database(String),

    /// A row could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Connection could not be opened or was lost
    #[error("Connection error: {0}")]
    Connection(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StorageError {
    /// Create a database error
    pub fn database<E: fmt::Display>(err: E) -> Self {
        Self::Database(err.to_string())
    }

    /// Create a decode error
    pub fn decode<E: fmt::Display>(err: E) -> Self {
        Self::Decode(err.to_string())
    }

    /// Create a connection error
    pub fn connection<E: fmt::Display>(msg: E) -> Self {
        Self::Connection(msg.to_string())
    }

    /// Create a configuration error
    pub fn configuration<E: fmt::Display>(msg: E) -> Self {
        Self::Configuration(msg.to_string())
    }

    /// Check if this is a connectivity error
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(e) => Self::configuration(e),
            sqlx::Error::Io(e) => Self::connection(e),
            sqlx::Error::Tls(e) => Self::connection(e),
            sqlx::Error::PoolTimedOut => Self::connection("timed out acquiring a connection"),
            sqlx::Error::PoolClosed => Self::connection("connection pool is closed"),
            sqlx::Error::ColumnNotFound(column) => {
                Self::decode(format!("column not found: {}", column))
            }
            sqlx::Error::ColumnDecode { index, source } => {
                Self::decode(format!("column {}: {}", index, source))
            }
            sqlx::Error::Decode(e) => Self::decode(e),
            other => Self::database(other),
        }
    }
}
