// ABOUTME: Persistence boundary for wallet authentication configuration
// ABOUTME: ConfigStore trait with SQLite and in-memory implementations

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use memory::MemoryConfigStore;
pub use sqlite::SqliteConfigStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A named configuration blob store.
///
/// Each configuration object lives under a unique name (e.g.
/// `"wallet_auth.settings"`) as a single JSON document. Writes replace the
/// whole document; there is no partial update at this boundary. Concurrent
/// writers are last-write-wins.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetch the blob stored under `name`, or `None` if nothing has been
    /// saved yet. Absence is not an error.
    async fn get(&self, name: &str) -> Result<Option<Value>, StorageError>;

    /// Atomically replace the blob stored under `name`.
    async fn replace(&self, name: &str, value: &Value) -> Result<(), StorageError>;
}
