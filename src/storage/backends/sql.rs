//! SQL user store backed by an sqlx `AnyPool`
//!
//! The driver is picked from the connection string scheme, so the same code
//! serves MySQL stores in production and SQLite files in tests.

use async_trait::async_trait;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Row};
use tracing::{debug, info};

use super::super::config::DatabaseConfig;
use super::super::error::{StorageError, StorageResult};
use super::super::traits::UserRepository;
use super::super::types::{PhotoPresence, UserPhotoRow};

const SELECT_USERS: &str = r#"
    SELECT u.id AS user_id, i.identification_number AS identification_number, u.photo AS photo
    FROM users u
    INNER JOIN identifications i ON i.id = u.identification_id
"#;

/// User repository over a relational store
pub struct SqlUserRepository {
    pool: AnyPool,
}

impl SqlUserRepository {
    /// Open a connection pool for `connection_string`
    pub async fn connect(connection_string: &str, config: &DatabaseConfig) -> StorageResult<Self> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(connection_string)
            .await
            .map_err(|e| StorageError::connection(format!("Failed to connect to database: {}", e)))?;

        info!("Connected to {} store", backend_name(connection_string));
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Create the users and identifications tables when missing
    pub async fn initialize_schema(&self) -> StorageResult<()> {
        debug!("Initializing user schema");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                identification_id INTEGER NOT NULL,
                photo VARCHAR(255)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::database(format!("Failed to create users table: {}", e)))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS identifications (
                id INTEGER PRIMARY KEY,
                identification_number VARCHAR(64),
                user_id INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::database(format!("Failed to create identifications table: {}", e))
        })?;

        Ok(())
    }

    fn decode_row(row: &AnyRow) -> StorageResult<UserPhotoRow> {
        Ok(UserPhotoRow {
            user_id: row.try_get("user_id")?,
            identification_number: row.try_get("identification_number")?,
            photo: row.try_get("photo")?,
        })
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_users(&self, presence: PhotoPresence) -> StorageResult<Vec<UserPhotoRow>> {
        let predicate = match presence {
            PhotoPresence::Present => "u.photo IS NOT NULL AND u.photo <> ''",
            PhotoPresence::Absent => "u.photo IS NULL OR u.photo = ''",
        };
        // rows without an identification number can never be matched
        let query = format!(
            "{} WHERE i.identification_number IS NOT NULL AND ({}) ORDER BY u.id",
            SELECT_USERS, predicate
        );
        debug!("Querying users with photo {:?}", presence);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        rows.iter().map(Self::decode_row).collect()
    }

    async fn update_user_photo(&self, user_id: i64, file_name: &str) -> StorageResult<bool> {
        debug!("Updating photo of user {}", user_id);

        let result = sqlx::query("UPDATE users SET photo = ? WHERE id = ?")
            .bind(file_name)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

fn backend_name(connection_string: &str) -> &str {
    connection_string
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .unwrap_or("unknown")
}
