//! # photo-migrate
//!
//! One-shot migration of user photos between two databases' file stores.
//!
//! ## Usage
//!
//! ```bash
//! photo-migrate [--config photo-migrate.toml] [-v]
//! ```
//!
//! ## Modules
//!
//! - `app` - Application shell: logging, settings lookup, run lifecycle
//! - `config` - Settings file and environment overrides
//! - `error` - Fatal error type and exit codes
//! - `migration` - Record matching, photo copy and destination update
//! - `storage` - User repositories for the source and destination stores
pub mod app;
pub mod config;
pub mod error;
pub mod migration;
pub mod storage;
