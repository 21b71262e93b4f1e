//! Storage layer for the source and destination user stores
//!
//! Both stores are reached through the [`UserRepository`] trait so the
//! migration itself never deals with SQL or connection handling.

pub mod backends;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use backends::{MemoryUserRepository, SqlUserRepository};
pub use config::DatabaseConfig;
pub use error::{StorageError, StorageResult};
pub use traits::UserRepository;
pub use types::{PhotoPresence, UserPhotoRow};
