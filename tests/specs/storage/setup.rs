//! Storage setup specs
//!
//! Choosing a location records it durably but creates nothing until the
//! first write.

use crate::prelude::*;

#[test]
fn fresh_install_is_unconfigured() {
    let temp = Project::empty();

    temp.chops()
        .args(&["storage", "status"])
        .passes()
        .stdout_eq("mode:       file\nconfigured: no\nlocation:   -\n");
}

#[test]
fn setup_records_default_location() {
    let temp = Project::empty();
    let location = temp.default_location();

    temp.chops()
        .args(&["storage", "setup"])
        .passes()
        .stdout_eq(&format!("Storage configured: {}\n", location.display()));

    assert!(!location.exists());
    assert_eq!(
        temp.json(&temp.path().join("config/config.json")),
        json!({"storagePath": location})
    );
}

#[test]
fn first_write_creates_folder_and_document() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();

    temp.chops()
        .args(&["set", "practiceItems", r#"[{"id":"1","name":"Scales"}]"#])
        .passes();

    assert_eq!(
        temp.json(&temp.default_location().join(DATA_FILE)),
        json!({"practiceItems": [{"id": "1", "name": "Scales"}]})
    );
}

#[test]
fn document_is_pretty_printed() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();
    temp.chops().args(&["set", "userTags", r#"["a"]"#]).passes();

    let text = std::fs::read_to_string(temp.default_location().join(DATA_FILE)).unwrap();
    assert!(text.contains("\n  \"userTags\""), "not pretty: {text}");
}

#[test]
fn unknown_document_keys_survive_writes() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();
    temp.file(
        "Documents/Music Practice Log/practice-log-data.json",
        r#"{"futureFeature": {"enabled": true}}"#,
    );

    temp.chops().args(&["set", "colorTheme", r#""teal""#]).passes();

    assert_eq!(
        temp.json(&temp.default_location().join(DATA_FILE)),
        json!({"futureFeature": {"enabled": true}, "colorTheme": "teal"})
    );
}
