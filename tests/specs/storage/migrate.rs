//! Storage migration specs

use crate::prelude::*;

#[test]
fn migrate_copies_document_and_moves_pointer() {
    let temp = Project::empty();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    temp.file("a/practice-log-data.json", r#"{"x": 1}"#);
    temp.chops().args(&["storage", "setup"]).arg(&a).passes();

    temp.chops()
        .args(&["storage", "migrate"])
        .arg(&b)
        .passes()
        .stdout_has("Practice data moved to");

    assert_eq!(temp.json(&b.join(DATA_FILE)), json!({"x": 1}));
    let status = temp
        .chops()
        .args(&["storage", "status", "--format", "json"])
        .passes()
        .stdout_json();
    assert_eq!(status["location"], json!(b));
}

#[test]
fn failed_migrate_keeps_old_location() {
    let temp = Project::empty();
    let a = temp.path().join("a");
    temp.file("a/practice-log-data.json", r#"{"x": 1}"#);
    // A file where the target directory would go
    let blocked = temp.file("blocked", "");
    temp.chops().args(&["storage", "setup"]).arg(&a).passes();

    temp.chops()
        .args(&["storage", "migrate"])
        .arg(blocked.join("b"))
        .fails();

    let status = temp
        .chops()
        .args(&["storage", "status", "--format", "json"])
        .passes()
        .stdout_json();
    assert_eq!(status["location"], json!(a));
}
