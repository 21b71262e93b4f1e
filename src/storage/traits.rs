//! Repository trait implemented by every user store backend

use async_trait::async_trait;

use super::error::StorageResult;
use super::types::{PhotoPresence, UserPhotoRow};

/// Access to the users of one store
///
/// The migration reads from one repository and reads from and writes to a
/// second one. Implementations hold their own connection resources and must
/// release them in [`UserRepository::close`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every user whose photo column satisfies `presence`, ordered by user id
    async fn find_users(&self, presence: PhotoPresence) -> StorageResult<Vec<UserPhotoRow>>;

    /// Set the photo column of one user
    ///
    /// Returns `Ok(false)` when no user with `user_id` exists.
    async fn update_user_photo(&self, user_id: i64, file_name: &str) -> StorageResult<bool>;

    /// Release connection resources
    async fn close(&self) {}
}
