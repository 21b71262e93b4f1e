//! Per-record outcomes and run statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to one source photo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecordOutcome {
    /// Photo copied and destination user updated
    Migrated {
        user_id: i64,
        identification_number: String,
        file_name: String,
    },
    /// No destination user carries this identification number
    Unmatched { identification_number: String },
    /// Matched, but the photo file is not in the source directory
    SourceMissing {
        identification_number: String,
        path: String,
    },
    /// The file copy failed; nothing was written
    CopyFailed {
        user_id: i64,
        identification_number: String,
        reason: String,
    },
    /// Photo copied, but the user row was gone when updating
    UserVanished {
        user_id: i64,
        identification_number: String,
        file_name: String,
    },
    /// Photo copied, but the update statement failed
    UpdateFailed {
        user_id: i64,
        identification_number: String,
        file_name: String,
        reason: String,
    },
}

impl RecordOutcome {
    pub fn identification_number(&self) -> &str {
        match self {
            Self::Migrated {
                identification_number,
                ..
            }
            | Self::Unmatched {
                identification_number,
            }
            | Self::SourceMissing {
                identification_number,
                ..
            }
            | Self::CopyFailed {
                identification_number,
                ..
            }
            | Self::UserVanished {
                identification_number,
                ..
            }
            | Self::UpdateFailed {
                identification_number,
                ..
            } => identification_number,
        }
    }

    /// File written to the destination directory, if any
    pub fn written_file(&self) -> Option<&str> {
        match self {
            Self::Migrated { file_name, .. }
            | Self::UserVanished { file_name, .. }
            | Self::UpdateFailed { file_name, .. } => Some(file_name),
            _ => None,
        }
    }
}

/// Counters for one migration run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationStats {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub source_records: usize,
    pub migrated: usize,
    pub unmatched: usize,
    pub source_missing: usize,
    pub copy_failed: usize,
    pub users_vanished: usize,
    pub update_failed: usize,
}

impl MigrationStats {
    fn count(&mut self, outcome: &RecordOutcome) {
        self.source_records += 1;
        match outcome {
            RecordOutcome::Migrated { .. } => self.migrated += 1,
            RecordOutcome::Unmatched { .. } => self.unmatched += 1,
            RecordOutcome::SourceMissing { .. } => self.source_missing += 1,
            RecordOutcome::CopyFailed { .. } => self.copy_failed += 1,
            RecordOutcome::UserVanished { .. } => self.users_vanished += 1,
            RecordOutcome::UpdateFailed { .. } => self.update_failed += 1,
        }
    }

    /// Records that ended in a copy or update error
    pub fn failures(&self) -> usize {
        self.copy_failed + self.update_failed
    }

    /// Records skipped without touching the filesystem
    pub fn skipped(&self) -> usize {
        self.unmatched + self.source_missing
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let elapsed = match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => format!(" in {}ms", (end - start).num_milliseconds()),
            _ => String::new(),
        };
        format!(
            "{} source records processed{}: {} migrated, {} without destination user, {} missing source file, {} copy errors, {} vanished users, {} update errors",
            self.source_records,
            elapsed,
            self.migrated,
            self.unmatched,
            self.source_missing,
            self.copy_failed,
            self.users_vanished,
            self.update_failed,
        )
    }
}

/// Outcomes of a run, in source record order, plus totals
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MigrationReport {
    pub stats: MigrationStats,
    pub outcomes: Vec<RecordOutcome>,
}

impl MigrationReport {
    pub(crate) fn start() -> Self {
        Self {
            stats: MigrationStats {
                started_at: Some(Utc::now()),
                ..MigrationStats::default()
            },
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, outcome: RecordOutcome) {
        self.stats.count(&outcome);
        self.outcomes.push(outcome);
    }

    pub(crate) fn finish(&mut self) {
        self.stats.completed_at = Some(Utc::now());
    }

    /// File names written to the destination directory
    pub fn written_files(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(RecordOutcome::written_file)
            .collect()
    }
}
