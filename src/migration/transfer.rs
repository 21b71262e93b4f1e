//! Photo file copy between the two storage directories

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::trace;
use uuid::Uuid;

/// Extension given to every migrated photo
const PHOTO_EXTENSION: &str = "jpg";

/// Failure while copying one photo
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TransferError {
    /// Underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Copy { source, .. } => source,
        }
    }
}

/// A photo written to the destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferredPhoto {
    /// Generated file name, as stored in the destination database
    pub file_name: String,
    pub destination_path: PathBuf,
    pub bytes: u64,
}

/// Copies photos from the source directory into the destination directory
#[derive(Debug, Clone)]
pub struct PhotoTransfer {
    source_dir: PathBuf,
    destination_dir: PathBuf,
}

impl PhotoTransfer {
    pub fn new(source_dir: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
        }
    }

    /// Full path of a photo in the source directory
    pub fn source_path(&self, file_name: &str) -> PathBuf {
        self.source_dir.join(file_name)
    }

    /// Whether a regular file exists for `file_name` in the source directory
    ///
    /// Any error while probing the path counts as "not found".
    pub async fn source_exists(&self, file_name: &str) -> bool {
        fs::metadata(self.source_path(file_name))
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    /// Fresh destination file name: `<uuid>_<identification number>.jpg`
    pub fn generate_file_name(identification_number: &str) -> String {
        format!(
            "{}_{}.{}",
            Uuid::new_v4(),
            identification_number,
            PHOTO_EXTENSION
        )
    }

    /// Copy `file_name` from the source directory under a newly generated name
    ///
    /// An existing file at the destination path is overwritten.
    pub async fn copy(
        &self,
        file_name: &str,
        identification_number: &str,
    ) -> Result<TransferredPhoto, TransferError> {
        let from = self.source_path(file_name);
        let new_name = Self::generate_file_name(identification_number);
        let to = self.destination_dir.join(&new_name);

        trace!("Copying {} to {}", from.display(), to.display());
        let bytes = fs::copy(&from, &to)
            .await
            .map_err(|source| TransferError::Copy {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;

        Ok(TransferredPhoto {
            file_name: new_name,
            destination_path: to,
            bytes,
        })
    }
}
