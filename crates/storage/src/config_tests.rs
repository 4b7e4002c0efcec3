// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chops_adapters::FakePlatform;

fn config_store() -> (FakePlatform, ConfigStore<FakePlatform>) {
    let platform = FakePlatform::new();
    let store = ConfigStore::for_platform(platform.clone()).unwrap();
    (platform, store)
}

#[tokio::test]
async fn missing_config_has_no_storage_path() {
    let (_, store) = config_store();
    assert_eq!(store.storage_path().await.unwrap(), None);
}

#[tokio::test]
async fn storage_path_written_as_camel_case() {
    let (platform, store) = config_store();
    store
        .set_storage_path(Some(&Location::new("/music")))
        .await
        .unwrap();

    let text = platform.file(&store.path()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!({"storagePath": "/music"}));
    assert_eq!(
        store.storage_path().await.unwrap(),
        Some(Location::new("/music"))
    );
}

#[tokio::test]
async fn clearing_keeps_unknown_settings() {
    let (platform, store) = config_store();
    platform.insert_file(
        store.path(),
        r#"{"storagePath": "/music", "windowSize": [800, 600]}"#,
    );

    store.set_storage_path(None).await.unwrap();

    let value: Value = serde_json::from_str(&platform.file(&store.path()).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"windowSize": [800, 600]}));
}

#[tokio::test]
async fn corrupt_config_reads_as_empty() {
    let (platform, store) = config_store();
    platform.insert_file(store.path(), "storagePath=/music");

    assert_eq!(store.load().await.unwrap(), AppConfig::default());
}

#[tokio::test]
async fn config_file_lives_in_platform_config_dir() {
    let (platform, store) = config_store();
    assert_eq!(
        store.path(),
        platform.config_dir().unwrap().join(CONFIG_FILE_NAME)
    );
}

#[tokio::test]
async fn save_failure_is_reported() {
    let (platform, store) = config_store();
    platform.fail_writes(true);

    let result = store.set_storage_path(Some(&Location::new("/music"))).await;
    assert!(matches!(result, Err(StoreError::Platform(_))));
}

#[tokio::test]
async fn failed_rename_removes_temp_file() {
    let (platform, store) = config_store();
    store
        .set_storage_path(Some(&Location::new("/music")))
        .await
        .unwrap();
    platform.fail_renames(true);

    let result = store.set_storage_path(Some(&Location::new("/other"))).await;

    assert!(matches!(result, Err(StoreError::Platform(_))));
    assert_eq!(platform.file_paths(), vec![store.path()]);
    assert_eq!(
        store.storage_path().await.unwrap(),
        Some(Location::new("/music"))
    );
}
