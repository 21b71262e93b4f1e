//! Error handling utilities
//!
//! This module provides centralized handling of fatal errors.

use tracing::error;

use crate::error::MigrateError;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `MigrateError`: shows the user message, plus the coded developer
///   message in verbose mode
/// - For other errors: shows the error message and, in verbose mode, the chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let exit_code = exit_code_for(&error);
    if let Some(migrate_err) = error.downcast_ref::<MigrateError>() {
        eprintln!("{}", migrate_err.user_message());
        if verbose >= 1 {
            eprintln!("\n{}", migrate_err.developer_message());
        }
    } else {
        eprintln!("Error: {error}");
    }

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code)
}

/// Exit code for an error, looking through any added context
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<MigrateError>()
        .map(MigrateError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use anyhow::Context;

    #[test]
    fn test_exit_code_for_wrapped_errors() {
        let err: anyhow::Error = MigrateError::from(ConfigError::MissingField("x")).into();
        assert_eq!(exit_code_for(&err), 2);

        let err = Err::<(), _>(MigrateError::storage(
            "source",
            crate::storage::StorageError::connection("refused"),
        ))
        .context("Failed to open stores")
        .unwrap_err();
        assert_eq!(exit_code_for(&err), 4);

        assert_eq!(exit_code_for(&anyhow::anyhow!("plain")), 1);
    }
}
