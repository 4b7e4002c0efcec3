//! Error reporting specs
//!
//! User mistakes exit with code 1 and explain how to recover.

use crate::prelude::*;

#[test]
fn unconfigured_get_suggests_setup() {
    let temp = Project::empty();

    let run = temp
        .chops()
        .args(&["get", "practiceItems"])
        .fails()
        .stderr_has("error: storage location not configured")
        .stderr_has("suggestions:");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn unknown_command_is_rejected_by_parser() {
    let temp = Project::empty();

    temp.chops().args(&["practice"]).fails();
}

#[test]
fn corrupt_document_reads_as_empty() {
    let temp = Project::empty();
    temp.chops().args(&["storage", "setup"]).passes();
    temp.file("Documents/Music Practice Log/practice-log-data.json", "{\"trunc");

    temp.chops()
        .args(&["get", "userTags"])
        .passes()
        .stdout_eq("[]\n");
}
