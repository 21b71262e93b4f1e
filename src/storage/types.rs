//! Row types shared by the storage backends

use serde::{Deserialize, Serialize};

/// Predicate over a user's photo column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoPresence {
    /// Photo is set and non-empty
    Present,
    /// Photo is NULL or empty
    Absent,
}

impl PhotoPresence {
    /// Evaluate the predicate against a photo value
    pub fn matches(self, photo: Option<&str>) -> bool {
        let has_photo = photo.is_some_and(|p| !p.is_empty());
        match self {
            Self::Present => has_photo,
            Self::Absent => !has_photo,
        }
    }
}

/// A user row joined with its identification number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPhotoRow {
    pub user_id: i64,
    pub identification_number: String,
    pub photo: Option<String>,
}

impl UserPhotoRow {
    pub fn new(
        user_id: i64,
        identification_number: impl Into<String>,
        photo: Option<&str>,
    ) -> Self {
        Self {
            user_id,
            identification_number: identification_number.into(),
            photo: photo.map(str::to_string),
        }
    }
}
