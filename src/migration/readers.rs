//! Load the record snapshots the migration works on
//!
//! Each reader runs one query against its store and keeps the full filtered
//! result in memory. Errors propagate unchanged; nothing is retried.

use tracing::{debug, info};

use super::records::{DestinationUserRecord, SourcePhotoRecord};
use crate::storage::{PhotoPresence, StorageResult, UserRepository};

/// Read every source user that has a photo
pub async fn load_source_records(
    repository: &dyn UserRepository,
) -> StorageResult<Vec<SourcePhotoRecord>> {
    let rows = repository.find_users(PhotoPresence::Present).await?;
    let total = rows.len();
    let records: Vec<_> = rows
        .into_iter()
        .filter_map(SourcePhotoRecord::from_row)
        .collect();

    if records.len() != total {
        debug!(
            "Dropped {} source rows without a photo file name",
            total - records.len()
        );
    }
    info!("Loaded {} source photo records", records.len());
    Ok(records)
}

/// Read every destination user still lacking a photo
pub async fn load_destination_records(
    repository: &dyn UserRepository,
) -> StorageResult<Vec<DestinationUserRecord>> {
    let records: Vec<DestinationUserRecord> = repository
        .find_users(PhotoPresence::Absent)
        .await?
        .into_iter()
        .map(DestinationUserRecord::from)
        .collect();

    info!("Loaded {} destination users without a photo", records.len());
    Ok(records)
}
