// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::backend::KeyValueFallbackStore;
use chops_adapters::{KeyValueStore, MemoryKeyValueStore};
use chops_core::BackupError;
use chrono::TimeZone;
use serde_json::json;

async fn loaded_state(kv: &MemoryKeyValueStore) -> PracticeState {
    let state = PracticeState::bind(Arc::new(KeyValueFallbackStore::new(kv.clone())));
    state.loaded().await;
    state
}

fn stored(kv: &MemoryKeyValueStore, key: &str) -> Option<Value> {
    kv.get(key)
        .unwrap()
        .map(|text| serde_json::from_str(&text).unwrap())
}

#[tokio::test]
async fn snapshot_has_every_slice_with_defaults() {
    let state = loaded_state(&MemoryKeyValueStore::new()).await;

    let snapshot = state.snapshot();

    assert_eq!(snapshot.len(), KNOWN_SLICES.len());
    assert_eq!(snapshot["practiceItems"], json!([]));
    assert_eq!(snapshot["sessionTotalTime"], json!(0));
    assert_eq!(snapshot["colorTheme"], json!("violet"));
}

#[tokio::test]
async fn export_contains_only_backed_up_slices() {
    let kv = MemoryKeyValueStore::new();
    kv.set("practiceItems", r#"[{"id": "1"}]"#).unwrap();
    kv.set("sessionQueue", r#"[{"id": "1"}]"#).unwrap();
    let state = loaded_state(&kv).await;
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let backup = state.export(at);

    let keys: Vec<&str> = backup.slices.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["archivedItems", "colorTheme", "practiceItems", "practiceSessions", "userTags"]
    );
    assert_eq!(backup.slices["practiceItems"], json!([{"id": "1"}]));
    assert_eq!(backup.exported_at, Some(at));
    assert_eq!(backup.version, "1.0");
}

#[tokio::test]
async fn import_replaces_slices_and_resets_absent_ones() {
    let kv = MemoryKeyValueStore::new();
    kv.set("userTags", r#"["old"]"#).unwrap();
    kv.set("sessionQueue", r#"[{"id": "q"}]"#).unwrap();
    let state = loaded_state(&kv).await;
    let backup = Backup::parse(
        r#"{"practiceItems": [{"id": "2"}], "practiceSessions": [], "colorTheme": "teal"}"#,
    )
    .unwrap();

    state.import(&backup).unwrap();

    assert_eq!(state.get("practiceItems"), Some(json!([{"id": "2"}])));
    assert_eq!(state.get("userTags"), Some(json!([])));
    assert_eq!(stored(&kv, "userTags"), Some(json!([])));
    // Not part of backups
    assert_eq!(state.get("sessionQueue"), Some(json!([{"id": "q"}])));
}

#[tokio::test]
async fn import_leaves_theme_alone() {
    let kv = MemoryKeyValueStore::new();
    kv.set("colorTheme", r#""rose""#).unwrap();
    let state = loaded_state(&kv).await;

    for text in [
        r#"{"practiceItems": [], "practiceSessions": [], "colorTheme": "teal"}"#,
        r#"{"practiceItems": [], "practiceSessions": []}"#,
    ] {
        state.import(&Backup::parse(text).unwrap()).unwrap();
        assert_eq!(state.get("colorTheme"), Some(json!("rose")));
    }
    assert_eq!(stored(&kv, "colorTheme"), Some(json!("rose")));
}

#[tokio::test]
async fn import_missing_required_slice_changes_nothing() {
    let kv = MemoryKeyValueStore::new();
    let state = loaded_state(&kv).await;
    let backup = Backup {
        slices: serde_json::from_value(json!({"practiceItems": [1]})).unwrap(),
        exported_at: None,
        version: "1.0".to_string(),
    };

    let err = state.import(&backup).unwrap_err();

    assert!(matches!(
        err,
        ImportError::Backup(BackupError::MissingSlice("practiceSessions"))
    ));
    assert_eq!(state.get("practiceItems"), Some(json!([])));
    assert!(kv.is_empty());
}

#[tokio::test]
async fn import_with_mistyped_slice_is_all_or_nothing() {
    let kv = MemoryKeyValueStore::new();
    let state = loaded_state(&kv).await;
    let backup = Backup::parse(
        r#"{"practiceItems": [{"id": "1"}], "practiceSessions": [], "userTags": "jazz"}"#,
    )
    .unwrap();

    let err = state.import(&backup).unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid backup file format: userTags must be a list, got a string"
    );
    assert_eq!(state.get("practiceItems"), Some(json!([])));
    assert!(kv.is_empty());
}

#[tokio::test]
async fn set_checks_key_and_type() {
    let kv = MemoryKeyValueStore::new();
    let state = loaded_state(&kv).await;

    assert!(matches!(
        state.set("metronomeBpm", json!(120)),
        Err(BindingError::UnknownSlice(_))
    ));
    assert!(matches!(
        state.set("sessionTotalTime", json!("ten")),
        Err(BindingError::TypeMismatch { .. })
    ));

    state.set("sessionTotalTime", json!(600)).unwrap();
    assert_eq!(stored(&kv, "sessionTotalTime"), Some(json!(600)));
}
