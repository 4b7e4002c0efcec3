//! Backup import specs
//!
//! An import applies completely or not at all.

use crate::prelude::*;

#[test]
fn export_then_import_restores_data() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();
    temp.chops()
        .args(&["set", "practiceItems", r#"[{"id":"1"}]"#])
        .passes();
    let out = temp.path().join("backup.json");
    temp.chops().args(&["export", "-o"]).arg(&out).passes();
    temp.chops().args(&["set", "practiceItems", "[]"]).passes();

    temp.chops().args(&["import"]).arg(&out).passes();

    let items = temp
        .chops()
        .args(&["get", "practiceItems"])
        .passes()
        .stdout_json();
    assert_eq!(items, json!([{"id": "1"}]));
}

#[test]
fn mistyped_slice_rejects_whole_backup() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();
    temp.chops().args(&["set", "userTags", r#"["keep"]"#]).passes();
    let bad = temp.file(
        "bad.json",
        r#"{"practiceItems": [{"id": "new"}], "practiceSessions": [], "userTags": "scales"}"#,
    );

    temp.chops()
        .args(&["import"])
        .arg(&bad)
        .fails()
        .stderr_has("userTags must be a list");

    let doc = temp.json(&temp.default_location().join(DATA_FILE));
    assert_eq!(doc, json!({"userTags": ["keep"]}));
}

#[test]
fn non_json_backup_is_rejected() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();
    let bad = temp.file("bad.json", "not a backup");

    temp.chops()
        .args(&["import"])
        .arg(&bad)
        .fails()
        .stderr_has("cannot import");
}
