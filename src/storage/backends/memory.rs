//! In-memory user store for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::storage::{
    error::{StorageError, StorageResult},
    traits::UserRepository,
    types::{PhotoPresence, UserPhotoRow},
};

/// In-memory user repository
///
/// Rows are returned in insertion order. Every successful update is also
/// recorded so tests can assert on the exact writes performed.
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    rows: Arc<RwLock<Vec<UserPhotoRow>>>,
    updates: Arc<RwLock<Vec<(i64, String)>>>,
    fail_updates: bool,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `rows`
    pub fn with_rows(rows: Vec<UserPhotoRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            ..Self::default()
        }
    }

    /// Make every update fail with a database error
    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub async fn insert(&self, row: UserPhotoRow) {
        self.rows.write().await.push(row);
    }

    /// Remove a user, simulating a row deleted after the pre-scan
    pub async fn remove(&self, user_id: i64) {
        self.rows.write().await.retain(|r| r.user_id != user_id);
    }

    /// Snapshot of all rows
    pub async fn rows(&self) -> Vec<UserPhotoRow> {
        self.rows.read().await.clone()
    }

    /// Updates applied so far, in order
    pub async fn updates(&self) -> Vec<(i64, String)> {
        self.updates.read().await.clone()
    }

    /// Photo currently stored for a user
    pub async fn photo_of(&self, user_id: i64) -> Option<String> {
        self.rows
            .read()
            .await
            .iter()
            .find(|r| r.user_id == user_id)
            .and_then(|r| r.photo.clone())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_users(&self, presence: PhotoPresence) -> StorageResult<Vec<UserPhotoRow>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| presence.matches(r.photo.as_deref()))
            .cloned()
            .collect())
    }

    async fn update_user_photo(&self, user_id: i64, file_name: &str) -> StorageResult<bool> {
        if self.fail_updates {
            return Err(StorageError::database(format!(
                "update of user {} rejected",
                user_id
            )));
        }

        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|r| r.user_id == user_id) else {
            return Ok(false);
        };
        row.photo = Some(file_name.to_string());
        self.updates
            .write()
            .await
            .push((user_id, file_name.to_string()));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_users_keeps_insertion_order() {
        let repo = MemoryUserRepository::with_rows(vec![
            UserPhotoRow::new(5, "E500", None),
            UserPhotoRow::new(1, "A100", Some("a.jpg")),
            UserPhotoRow::new(3, "C300", None),
        ]);

        let absent = repo.find_users(PhotoPresence::Absent).await.unwrap();
        let ids: Vec<i64> = absent.iter().map(|r| r.user_id).collect();
        assert_eq!(ids, vec![5, 3]);

        let present = repo.find_users(PhotoPresence::Present).await.unwrap();
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].identification_number, "A100");
    }

    #[tokio::test]
    async fn test_update_existing_and_missing_user() {
        let repo = MemoryUserRepository::new();
        repo.insert(UserPhotoRow::new(7, "A100", None)).await;

        assert!(repo.update_user_photo(7, "x.jpg").await.unwrap());
        assert!(!repo.update_user_photo(8, "y.jpg").await.unwrap());

        assert_eq!(repo.photo_of(7).await.as_deref(), Some("x.jpg"));
        assert_eq!(repo.updates().await, vec![(7, "x.jpg".to_string())]);
    }

    #[tokio::test]
    async fn test_failing_updates() {
        let repo = MemoryUserRepository::with_rows(vec![UserPhotoRow::new(1, "A100", None)])
            .failing_updates();

        assert!(repo.update_user_photo(1, "x.jpg").await.is_err());
        assert!(repo.updates().await.is_empty());
        assert_eq!(repo.photo_of(1).await, None);
    }

    #[tokio::test]
    async fn test_remove_user() {
        let repo = MemoryUserRepository::with_rows(vec![UserPhotoRow::new(1, "A100", None)]);
        repo.remove(1).await;
        assert!(repo.rows().await.is_empty());
    }
}
