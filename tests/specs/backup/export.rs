//! Backup export specs

use crate::prelude::*;

#[test]
fn export_has_backup_envelope() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();
    temp.chops()
        .args(&["set", "practiceSessions", r#"[{"id":"s1","duration":600}]"#])
        .passes();

    let backup = temp.chops().args(&["export"]).passes().stdout_json();

    assert_eq!(backup["practiceSessions"], json!([{"id": "s1", "duration": 600}]));
    assert_eq!(backup["archivedItems"], json!([]));
    assert_eq!(backup["userTags"], json!([]));
    assert_eq!(backup["version"], json!("1.0"));
    assert!(backup.get("sessionRecordings").is_none());
}

#[test]
fn export_to_file() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();
    let out = temp.path().join("mine.json");

    temp.chops().args(&["export", "-o"]).arg(&out).passes();

    assert_eq!(temp.json(&out)["practiceItems"], json!([]));
}

#[test]
fn export_works_in_local_storage_mode() {
    let temp = Project::empty();
    temp.chops()
        .args(&["--local-storage", "set", "colorTheme", r#""rose""#])
        .passes();

    let backup = temp
        .chops()
        .args(&["--local-storage", "export"])
        .passes()
        .stdout_json();

    assert_eq!(backup["colorTheme"], json!("rose"));
}
