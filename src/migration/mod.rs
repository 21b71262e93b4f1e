//! Photo migration between the source and destination stores
//!
//! The run is a plain extract-transform-load pass:
//!
//! 1. [`readers`] load the source users that have a photo and the destination
//!    users that lack one.
//! 2. [`PhotoMigrator`] joins them by identification number through a
//!    [`DestinationIndex`] (first match wins).
//! 3. For each match the photo is copied under a fresh
//!    `<uuid>_<identification number>.jpg` name by [`PhotoTransfer`], then the
//!    destination user is pointed at the new file.
//!
//! Every per-record problem is logged and recorded as a [`RecordOutcome`];
//! only store failures during loading abort the run.

pub mod index;
pub mod orchestrator;
pub mod readers;
pub mod records;
pub mod stats;
pub mod transfer;

pub use index::DestinationIndex;
pub use orchestrator::PhotoMigrator;
pub use readers::{load_destination_records, load_source_records};
pub use records::{DestinationUserRecord, MatchedPair, SourcePhotoRecord};
pub use stats::{MigrationReport, MigrationStats, RecordOutcome};
pub use transfer::{PhotoTransfer, TransferError, TransferredPhoto};
