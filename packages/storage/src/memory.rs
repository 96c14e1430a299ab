// ABOUTME: In-memory configuration blob storage
// ABOUTME: Used by tests and embedders that do not carry a database

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::{ConfigStore, StorageError};

#[derive(Default)]
pub struct MemoryConfigStore {
    blobs: RwLock<HashMap<String, Value>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn get(&self, name: &str) -> Result<Option<Value>, StorageError> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| StorageError::InvalidInput("store lock poisoned".to_string()))?;
        Ok(blobs.get(name).cloned())
    }

    async fn replace(&self, name: &str, value: &Value) -> Result<(), StorageError> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| StorageError::InvalidInput("store lock poisoned".to_string()))?;
        blobs.insert(name.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_absent_returns_none() {
        let store = MemoryConfigStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_overwrites_whole_blob() {
        let store = MemoryConfigStore::new();
        store
            .replace("cfg", &json!({"a": 1, "b": 2}))
            .await
            .unwrap();
        store.replace("cfg", &json!({"a": 3})).await.unwrap();

        let blob = store.get("cfg").await.unwrap().unwrap();
        assert_eq!(blob, json!({"a": 3}));
    }
}
