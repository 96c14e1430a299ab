// ABOUTME: Wallet authentication settings schema, validation, and persistence
// ABOUTME: Typed record, declarative field schema, and the settings manager

pub mod audit;
pub mod manager;
pub mod schema;
pub mod types;
pub mod validation;
pub mod view;

// Re-export main types
pub use audit::{AuditLog, TracingAuditLog};
pub use manager::SettingsManager;
pub use types::{
    AuthMethod, Network, SocialProvider, WalletAuthSettings, SETTINGS_CONFIG_NAME,
};
pub use validation::{
    validate_and_normalize, Validated, ValidationError, ValidationReason, ValidationWarning,
};
pub use view::{build_settings_form, BaseUrlProvider, SettingsForm, StaticBaseUrl};

// Re-export the storage boundary for embedders
pub use wallet_auth_storage::{ConfigStore, StorageError};
