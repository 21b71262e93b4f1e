//! Typed record snapshots read from the two stores

use serde::{Deserialize, Serialize};

use crate::storage::UserPhotoRow;

/// A source user that has a photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePhotoRecord {
    pub identification_number: String,
    pub photo_file_name: String,
}

impl SourcePhotoRecord {
    pub fn new(identification_number: impl Into<String>, photo_file_name: impl Into<String>) -> Self {
        Self {
            identification_number: identification_number.into(),
            photo_file_name: photo_file_name.into(),
        }
    }

    /// Project a repository row, dropping rows without a photo
    pub fn from_row(row: UserPhotoRow) -> Option<Self> {
        let photo = row.photo.filter(|p| !p.is_empty())?;
        Some(Self {
            identification_number: row.identification_number,
            photo_file_name: photo,
        })
    }
}

/// A destination user still waiting for a photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationUserRecord {
    pub user_id: i64,
    pub identification_number: String,
}

impl DestinationUserRecord {
    pub fn new(user_id: i64, identification_number: impl Into<String>) -> Self {
        Self {
            user_id,
            identification_number: identification_number.into(),
        }
    }
}

impl From<UserPhotoRow> for DestinationUserRecord {
    fn from(row: UserPhotoRow) -> Self {
        Self {
            user_id: row.user_id,
            identification_number: row.identification_number,
        }
    }
}

/// A source record paired with the destination user it will update
#[derive(Debug, Clone, Copy)]
pub struct MatchedPair<'a> {
    pub source: &'a SourcePhotoRecord,
    pub destination: &'a DestinationUserRecord,
}

impl MatchedPair<'_> {
    pub fn user_id(&self) -> i64 {
        self.destination.user_id
    }

    pub fn identification_number(&self) -> &str {
        &self.source.identification_number
    }
}
