// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform backed by the local filesystem and the terminal

use super::{Platform, PlatformError};
use async_trait::async_trait;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Real filesystem access via tokio, directories via `dirs`.
///
/// Each well-known directory can be overridden through the environment
/// (`CHOPS_DOCUMENTS_DIR`, `CHOPS_CONFIG_DIR`, `CHOPS_CACHE_DIR`), which
/// keeps tests and portable installs out of the user's real folders.
/// The folder picker prompts on stderr and reads one line from stdin.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativePlatform;

impl NativePlatform {
    pub fn new() -> Self {
        Self
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[async_trait]
impl Platform for NativePlatform {
    async fn read_to_string(&self, path: &Path) -> Result<Option<String>, PlatformError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlatformError::io("read", path, e)),
        }
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), PlatformError> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| PlatformError::io("write", path, e))
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), PlatformError> {
        tokio::fs::rename(from, to)
            .await
            .map_err(|e| PlatformError::io("rename", to, e))
    }

    async fn remove_file(&self, path: &Path) -> Result<(), PlatformError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PlatformError::io("remove", path, e)),
        }
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), PlatformError> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| PlatformError::io("mkdir", path, e))
    }

    async fn pick_folder(
        &self,
        title: &str,
        default: Option<&Path>,
    ) -> Result<Option<PathBuf>, PlatformError> {
        let prompt = match default {
            Some(d) => format!("{} (e.g. {}), empty to cancel: ", title, d.display()),
            None => format!("{}, empty to cancel: ", title),
        };

        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            let mut stderr = io::stderr();
            stderr.write_all(prompt.as_bytes())?;
            stderr.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await
        .map_err(|e| PlatformError::Picker(e.to_string()))?
        .map_err(|e| PlatformError::Picker(e.to_string()))?;

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }

    fn documents_dir(&self) -> Option<PathBuf> {
        env_dir("CHOPS_DOCUMENTS_DIR")
            .or_else(dirs::document_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
    }

    fn config_dir(&self) -> Option<PathBuf> {
        env_dir("CHOPS_CONFIG_DIR").or_else(|| dirs::config_dir().map(|d| d.join("chops")))
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        env_dir("CHOPS_CACHE_DIR").or_else(|| dirs::cache_dir().map(|d| d.join("chops")))
    }
}

#[cfg(test)]
#[path = "native_tests.rs"]
mod tests;
