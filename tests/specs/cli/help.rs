//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.chops()
        .args(&["--help"])
        .passes()
        .stdout_has("storage")
        .stdout_has("export")
        .stdout_has("import")
        .stdout_has("--local-storage");
}

#[test]
fn storage_help_lists_subcommands() {
    let temp = Project::empty();

    temp.chops()
        .args(&["storage", "--help"])
        .passes()
        .stdout_has("setup")
        .stdout_has("migrate")
        .stdout_has("reset");
}

#[test]
fn completions_mention_binary_name() {
    let temp = Project::empty();

    temp.chops()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("chops");
}
