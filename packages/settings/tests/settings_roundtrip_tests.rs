// ABOUTME: Integration tests for the settings engine over a SQLite store
// ABOUTME: Submission-to-storage round trips, defaults, and audit events

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

use wallet_auth_settings::{
    validate_and_normalize, AuditLog, AuthMethod, Network, SettingsManager, SocialProvider,
    WalletAuthSettings, SETTINGS_CONFIG_NAME,
};
use wallet_auth_storage::{ConfigStore, SqliteConfigStore};

#[derive(Default)]
struct CountingAudit {
    events: AtomicUsize,
}

impl AuditLog for CountingAudit {
    fn info(&self, _message: &str) {
        self.events.fetch_add(1, Ordering::SeqCst);
    }
}

/// Helper to create a manager over a fresh on-disk database
async fn setup_manager() -> (SettingsManager, Arc<SqliteConfigStore>, Arc<CountingAudit>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .unwrap();

    let store = Arc::new(SqliteConfigStore::new(pool));
    store.init_schema().await.unwrap();

    let audit = Arc::new(CountingAudit::default());
    let manager = SettingsManager::new(store.clone(), audit.clone());

    (manager, store, audit, temp_dir)
}

fn submission(entries: Value) -> Map<String, Value> {
    match entries {
        Value::Object(map) => map,
        _ => panic!("submission fixture must be a JSON object"),
    }
}

#[tokio::test]
async fn test_empty_store_loads_defaults() {
    let (manager, _, _, _tmp) = setup_manager().await;

    let record = manager.load_current().await.unwrap();

    assert_eq!(record.network, Network::Mainnet);
    assert!(record.enable_auto_connect);
    assert_eq!(record.nonce_lifetime, 300);
    assert_eq!(record.authentication_methods, AuthMethod::ALL.to_vec());
    assert_eq!(record.allowed_socials, SocialProvider::ALL.to_vec());
    assert_eq!(record.redirect_on_success, "/user");
}

#[tokio::test]
async fn test_validate_save_load_round_trip() {
    let (manager, _, _, _tmp) = setup_manager().await;

    let raw = submission(json!({
        "network": "optimism",
        "enable_auto_connect": 0,
        "nonce_lifetime": "3600",
        "authentication_methods": {"social": true, "email": false},
        "allowed_socials": {"twitter": "twitter", "google": 0, "discord": "discord", "bluesky": 0},
        "redirect_on_success": "/members",
    }));

    let validated = validate_and_normalize(&raw).unwrap();
    manager.save(&validated.record).await.unwrap();

    let loaded = manager.load_current().await.unwrap();
    assert_eq!(loaded, validated.record);

    assert_eq!(loaded.network, Network::Optimism);
    assert!(!loaded.enable_auto_connect);
    assert_eq!(loaded.nonce_lifetime, 3600);
    assert_eq!(loaded.authentication_methods, vec![AuthMethod::Social]);
    assert_eq!(
        loaded.allowed_socials,
        vec![SocialProvider::Twitter, SocialProvider::Discord]
    );
}

#[tokio::test]
async fn test_save_does_not_merge_with_prior_record() {
    let (manager, store, _, _tmp) = setup_manager().await;

    // Seed a record with every default, then save a narrow one; the old
    // values must not leak through.
    manager.save(&WalletAuthSettings::default()).await.unwrap();

    let narrow = WalletAuthSettings {
        network: Network::Bsc,
        enable_auto_connect: false,
        nonce_lifetime: 60,
        authentication_methods: vec![AuthMethod::Email],
        allowed_socials: vec![SocialProvider::Google],
        redirect_on_success: "/home".to_string(),
    };
    manager.save(&narrow).await.unwrap();

    let blob = store.get(SETTINGS_CONFIG_NAME).await.unwrap().unwrap();
    assert_eq!(
        blob,
        json!({
            "network": "bsc",
            "enable_auto_connect": false,
            "nonce_lifetime": 60,
            "authentication_methods": ["email"],
            "allowed_socials": ["google"],
            "redirect_on_success": "/home",
        })
    );
}

#[tokio::test]
async fn test_each_save_logs_one_audit_event() {
    let (manager, _, audit, _tmp) = setup_manager().await;

    assert_eq!(audit.events.load(Ordering::SeqCst), 0);

    manager.save(&WalletAuthSettings::default()).await.unwrap();
    assert_eq!(audit.events.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_partial_blob_loads_with_defaults_filled() {
    let (manager, store, _, _tmp) = setup_manager().await;

    store
        .replace(
            SETTINGS_CONFIG_NAME,
            &json!({"network": "sepolia", "nonce_lifetime": 1200}),
        )
        .await
        .unwrap();

    let record = manager.load_current().await.unwrap();
    assert_eq!(record.network, Network::Sepolia);
    assert_eq!(record.nonce_lifetime, 1200);
    // Everything the blob omits falls back to defaults.
    assert!(record.enable_auto_connect);
    assert_eq!(record.allowed_socials, SocialProvider::ALL.to_vec());
}

#[tokio::test]
async fn test_invalid_submission_never_reaches_store() {
    let (_manager, store, _, _tmp) = setup_manager().await;

    let raw = submission(json!({
        "network": "dogecoin",
        "nonce_lifetime": 600,
        "authentication_methods": {"email": true},
        "allowed_socials": {"google": true},
        "redirect_on_success": "/user",
    }));

    assert!(validate_and_normalize(&raw).is_err());

    // Validation failed, so nothing was saved.
    assert!(store.get(SETTINGS_CONFIG_NAME).await.unwrap().is_none());
}
