//! Migration run lifecycle
//!
//! Loads settings, opens both stores, reads the two record snapshots and
//! hands them to the migrator. Store pools are closed whether or not the
//! run succeeds.

use anyhow::{Context, Result};
use tracing::info;

use crate::app::config::AppConfig;
use crate::config::MigrationSettings;
use crate::error::MigrateError;
use crate::migration::{
    load_destination_records, load_source_records, MigrationReport, PhotoMigrator,
};
use crate::storage::{SqlUserRepository, UserRepository};

/// Load settings for `config` and run the migration
pub async fn run(config: &AppConfig) -> Result<MigrationReport> {
    let loader = config.settings_loader();
    let settings = loader
        .load()
        .await
        .map_err(MigrateError::from)
        .with_context(|| format!("Failed to load settings from {}", loader.path().display()))?;

    run_migration(&settings).await
}

/// Open both stores, migrate, and close the stores
pub async fn run_migration(settings: &MigrationSettings) -> Result<MigrationReport> {
    settings.check_directories().map_err(MigrateError::from)?;

    let source = SqlUserRepository::connect(&settings.source_connection_string, &settings.database)
        .await
        .map_err(|e| MigrateError::storage("source", e))?;

    let destination = match SqlUserRepository::connect(
        &settings.destination_connection_string,
        &settings.database,
    )
    .await
    {
        Ok(destination) => destination,
        Err(e) => {
            source.close().await;
            return Err(MigrateError::storage("destination", e).into());
        }
    };

    let result = execute_migration(settings, &source, &destination).await;

    source.close().await;
    destination.close().await;
    result
}

/// Read both snapshots and migrate using already opened stores
pub async fn execute_migration(
    settings: &MigrationSettings,
    source: &dyn UserRepository,
    destination: &dyn UserRepository,
) -> Result<MigrationReport> {
    let source_records = load_source_records(source)
        .await
        .map_err(|e| MigrateError::storage("source", e))
        .context("Failed to read source photo records")?;
    let destination_records = load_destination_records(destination)
        .await
        .map_err(|e| MigrateError::storage("destination", e))
        .context("Failed to read destination users")?;

    info!(
        "Migrating photos from {} to {}",
        settings.source_directory.display(),
        settings.destination_directory.display()
    );
    let migrator = PhotoMigrator::new(
        &settings.source_directory,
        &settings.destination_directory,
    );
    Ok(migrator
        .migrate(&source_records, &destination_records, destination)
        .await)
}
