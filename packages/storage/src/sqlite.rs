// ABOUTME: SQLite-backed configuration blob storage
// ABOUTME: One row per named configuration object, JSON text payload

use async_trait::async_trait;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::debug;

use crate::{ConfigStore, StorageError};

pub struct SqliteConfigStore {
    pool: SqlitePool,
}

impl SqliteConfigStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the backing table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS config_blobs (
                name TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now', 'utc'))
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(())
    }
}

#[async_trait]
impl ConfigStore for SqliteConfigStore {
    async fn get(&self, name: &str) -> Result<Option<Value>, StorageError> {
        debug!("Fetching config blob: {}", name);

        let row: Option<(String,)> =
            sqlx::query_as("SELECT data FROM config_blobs WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;

        match row {
            Some((data,)) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    async fn replace(&self, name: &str, value: &Value) -> Result<(), StorageError> {
        let data = serde_json::to_string(value)?;

        sqlx::query(
            r#"
            INSERT INTO config_blobs (name, data)
            VALUES (?, ?)
            ON CONFLICT(name) DO UPDATE SET
                data = excluded.data,
                updated_at = datetime('now', 'utc')
            "#,
        )
        .bind(name)
        .bind(&data)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(())
    }
}
