// ABOUTME: Settings manager coordinating validation, storage, and audit
// ABOUTME: Load-with-defaults and full-record replace-and-save operations

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use wallet_auth_storage::{ConfigStore, StorageError};

use crate::audit::AuditLog;
use crate::types::{WalletAuthSettings, SETTINGS_CONFIG_NAME};

const SAVED_MESSAGE: &str = "Wallet authentication settings updated.";

/// Orchestrates the settings lifecycle against the injected
/// collaborators. One validate+save cycle runs to completion within one
/// request; concurrent submissions are last-write-wins at the store.
pub struct SettingsManager {
    store: Arc<dyn ConfigStore>,
    audit: Arc<dyn AuditLog>,
}

impl SettingsManager {
    pub fn new(store: Arc<dyn ConfigStore>, audit: Arc<dyn AuditLog>) -> Self {
        Self { store, audit }
    }

    /// Read the current settings record. Keys missing from the stored
    /// blob take their schema defaults; a wholly absent blob yields the
    /// full default record. Absence is never an error.
    pub async fn load_current(&self) -> Result<WalletAuthSettings, StorageError> {
        let mut merged = serde_json::to_value(WalletAuthSettings::default())?;

        if let Some(Value::Object(stored)) = self.store.get(SETTINGS_CONFIG_NAME).await? {
            debug!("Loaded stored settings blob ({} keys)", stored.len());
            if let Value::Object(base) = &mut merged {
                for (key, value) in stored {
                    base.insert(key, value);
                }
            }
        }

        Ok(serde_json::from_value(merged)?)
    }

    /// Atomically replace the persisted record with `record`. Emits one
    /// informational audit event on success. Store failures propagate
    /// unmodified; no retry.
    pub async fn save(&self, record: &WalletAuthSettings) -> Result<(), StorageError> {
        let value = serde_json::to_value(record)?;
        self.store.replace(SETTINGS_CONFIG_NAME, &value).await?;

        self.audit.info(SAVED_MESSAGE);
        Ok(())
    }
}
