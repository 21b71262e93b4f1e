//! Drives the per-record match, copy and update sequence

use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use super::index::DestinationIndex;
use super::records::{DestinationUserRecord, MatchedPair, SourcePhotoRecord};
use super::stats::{MigrationReport, RecordOutcome};
use super::transfer::{PhotoTransfer, TransferredPhoto};
use crate::storage::UserRepository;

/// Migrates photos from the source directory into the destination store
///
/// Records are handled strictly one after another: each copy and update is
/// awaited before the next record starts. A failure on one record never
/// stops the run.
pub struct PhotoMigrator {
    transfer: PhotoTransfer,
}

impl PhotoMigrator {
    pub fn new(source_dir: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            transfer: PhotoTransfer::new(source_dir, destination_dir),
        }
    }

    /// Migrate every source record that has a matching destination user
    pub async fn migrate(
        &self,
        source_records: &[SourcePhotoRecord],
        destination_records: &[DestinationUserRecord],
        writer: &dyn UserRepository,
    ) -> MigrationReport {
        let index = DestinationIndex::build(destination_records);
        if index.duplicates() > 0 {
            warn!(
                "{} destination users share an identification number with an earlier user and will not be updated",
                index.duplicates()
            );
        }
        debug!(
            "Indexed {} destination identification numbers",
            index.len()
        );

        let mut report = MigrationReport::start();
        for record in source_records {
            let outcome = self.migrate_record(record, &index, writer).await;
            report.record(outcome);
        }
        report.finish();

        info!("{}", report.stats.summary());
        if let Ok(json) = serde_json::to_string(&report.stats) {
            debug!("Migration stats: {}", json);
        }
        report
    }

    async fn migrate_record(
        &self,
        record: &SourcePhotoRecord,
        index: &DestinationIndex<'_>,
        writer: &dyn UserRepository,
    ) -> RecordOutcome {
        let Some(destination) = index.find(&record.identification_number) else {
            warn!(
                "No destination user found with identification {}",
                record.identification_number
            );
            return RecordOutcome::Unmatched {
                identification_number: record.identification_number.clone(),
            };
        };
        let pair = MatchedPair {
            source: record,
            destination,
        };

        if !self.transfer.source_exists(&record.photo_file_name).await {
            let path = self.transfer.source_path(&record.photo_file_name);
            warn!(
                "Photo with identification {} not found in source directory: {}",
                pair.identification_number(),
                path.display()
            );
            return RecordOutcome::SourceMissing {
                identification_number: record.identification_number.clone(),
                path: path.display().to_string(),
            };
        }

        match self
            .transfer
            .copy(&record.photo_file_name, &record.identification_number)
            .await
        {
            Ok(photo) => {
                info!(
                    "Photo of user {} copied to {}",
                    pair.user_id(),
                    photo.destination_path.display()
                );
                self.persist(pair, photo, writer).await
            }
            Err(e) => {
                error!("Failed to copy photo of user {}: {}", pair.user_id(), e);
                RecordOutcome::CopyFailed {
                    user_id: pair.user_id(),
                    identification_number: record.identification_number.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn persist(
        &self,
        pair: MatchedPair<'_>,
        photo: TransferredPhoto,
        writer: &dyn UserRepository,
    ) -> RecordOutcome {
        let user_id = pair.user_id();
        let identification_number = pair.identification_number().to_string();

        match writer.update_user_photo(user_id, &photo.file_name).await {
            Ok(true) => {
                info!("Photo of user {} updated in the destination database", user_id);
                RecordOutcome::Migrated {
                    user_id,
                    identification_number,
                    file_name: photo.file_name,
                }
            }
            Ok(false) => {
                warn!(
                    "User {} no longer exists in the destination database; {} left unreferenced",
                    user_id,
                    photo.destination_path.display()
                );
                RecordOutcome::UserVanished {
                    user_id,
                    identification_number,
                    file_name: photo.file_name,
                }
            }
            Err(e) => {
                error!("Failed to update photo of user {}: {}", user_id, e);
                RecordOutcome::UpdateFailed {
                    user_id,
                    identification_number,
                    file_name: photo.file_name,
                    reason: e.to_string(),
                }
            }
        }
    }
}
