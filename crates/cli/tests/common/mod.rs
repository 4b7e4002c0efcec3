// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated documents, config and cache directories for one test
pub struct TestEnv {
    pub temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn documents_dir(&self) -> PathBuf {
        self.path().join("Documents")
    }

    pub fn config_file(&self) -> PathBuf {
        self.path().join("config/config.json")
    }

    pub fn cache_file(&self) -> PathBuf {
        self.path().join("cache/local-storage.json")
    }

    pub fn default_location(&self) -> PathBuf {
        self.documents_dir().join("Music Practice Log")
    }

    /// `chops` with every well-known directory inside the temp dir
    pub fn chops(&self) -> Command {
        let mut cmd = Command::cargo_bin("chops").expect("chops binary");
        cmd.current_dir(self.path())
            .env("CHOPS_DOCUMENTS_DIR", self.documents_dir())
            .env("CHOPS_CONFIG_DIR", self.path().join("config"))
            .env("CHOPS_CACHE_DIR", self.path().join("cache"))
            .env("CHOPS_DEBOUNCE_MS", "10")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Configure the default location
    pub fn setup(&self) -> PathBuf {
        self.chops().args(["storage", "setup"]).assert().success();
        self.default_location()
    }

    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        let text = std::fs::read_to_string(path).expect("read json file");
        serde_json::from_str(&text).expect("valid json")
    }
}
