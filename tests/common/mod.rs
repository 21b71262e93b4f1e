//! Common test utilities and helpers

use anyhow::Result;
use photo_migrate::storage::{DatabaseConfig, SqlUserRepository};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A SQLite user store living in a temporary directory
pub struct TestStore {
    _dir: TempDir,
    url: String,
}

impl TestStore {
    /// Create a store with the users/identifications schema
    pub async fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("users.db").display());
        let store = Self { _dir: dir, url };
        let repo = store.open().await?;
        repo.initialize_schema().await?;
        repo.pool().close().await;
        Ok(store)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn open(&self) -> Result<SqlUserRepository> {
        Ok(SqlUserRepository::connect(&self.url, &DatabaseConfig::default()).await?)
    }

    /// Insert a user and its identification row
    pub async fn add_user(&self, id: i64, number: &str, photo: Option<&str>) -> Result<()> {
        let repo = self.open().await?;
        sqlx::query(
            "INSERT INTO identifications (id, identification_number, user_id) VALUES (?, ?, ?)",
        )
        .bind(id + 10_000)
        .bind(number)
        .bind(id)
        .execute(repo.pool())
        .await?;

        match photo {
            Some(photo) => {
                sqlx::query("INSERT INTO users (id, identification_id, photo) VALUES (?, ?, ?)")
                    .bind(id)
                    .bind(id + 10_000)
                    .bind(photo)
                    .execute(repo.pool())
                    .await?;
            }
            None => {
                sqlx::query("INSERT INTO users (id, identification_id, photo) VALUES (?, ?, NULL)")
                    .bind(id)
                    .bind(id + 10_000)
                    .execute(repo.pool())
                    .await?;
            }
        }
        repo.pool().close().await;
        Ok(())
    }

    /// Insert a user whose identification row has a NULL number
    pub async fn add_user_without_number(&self, id: i64, photo: &str) -> Result<()> {
        let repo = self.open().await?;
        sqlx::query(
            "INSERT INTO identifications (id, identification_number, user_id) VALUES (?, NULL, ?)",
        )
        .bind(id + 10_000)
        .bind(id)
        .execute(repo.pool())
        .await?;
        sqlx::query("INSERT INTO users (id, identification_id, photo) VALUES (?, ?, ?)")
            .bind(id)
            .bind(id + 10_000)
            .bind(photo)
            .execute(repo.pool())
            .await?;
        repo.pool().close().await;
        Ok(())
    }

    /// Current photo value of a user
    pub async fn photo_of(&self, id: i64) -> Result<Option<String>> {
        use sqlx::Row;

        let repo = self.open().await?;
        let row = sqlx::query("SELECT photo FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(repo.pool())
            .await?;
        let photo: Option<String> = row.try_get("photo")?;
        repo.pool().close().await;
        Ok(photo)
    }
}

/// Source and destination photo directories
pub struct PhotoDirs {
    _root: TempDir,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl PhotoDirs {
    pub fn new() -> Result<Self> {
        let root = TempDir::new()?;
        let source = root.path().join("project1").join("photos");
        let destination = root.path().join("project2").join("private").join("user_photos");
        fs::create_dir_all(&source)?;
        fs::create_dir_all(&destination)?;
        Ok(Self {
            _root: root,
            source,
            destination,
        })
    }

    pub fn add_photo(&self, name: &str, content: &[u8]) -> Result<()> {
        fs::write(self.source.join(name), content)?;
        Ok(())
    }

    pub fn destination_files(&self) -> Result<Vec<String>> {
        list_files(&self.destination)
    }
}

pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
