// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable application config record
//!
//! Lives in the platform's config directory, independent of the document,
//! so the chosen storage location survives cache clears and reinstalls.

use crate::{bounded, StoreError, DEFAULT_IO_TIMEOUT};
use chops_adapters::Platform;
use chops_core::Location;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the config record inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Contents of `config.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<Location>,
    /// Settings this version does not know about, kept on rewrite
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Reads and writes the config record
#[derive(Clone)]
pub struct ConfigStore<P> {
    platform: P,
    dir: PathBuf,
    timeout: Duration,
}

impl<P: Platform> ConfigStore<P> {
    pub fn new(platform: P, dir: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            dir: dir.into(),
            timeout: DEFAULT_IO_TIMEOUT,
        }
    }

    /// Config store in the platform's config directory
    pub fn for_platform(platform: P) -> Result<Self, StoreError> {
        let dir = platform.config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::new(platform, dir))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Load the record; a missing or corrupt file reads as empty
    pub async fn load(&self) -> Result<AppConfig, StoreError> {
        let path = self.path();
        let text = bounded(
            self.timeout,
            "read",
            &path,
            self.platform.read_to_string(&path),
        )
        .await?;

        let Some(text) = text else {
            return Ok(AppConfig::default());
        };
        match serde_json::from_str(&text) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt config");
                Ok(AppConfig::default())
            }
        }
    }

    pub async fn save(&self, config: &AppConfig) -> Result<(), StoreError> {
        let path = self.path();
        let json = serde_json::to_string_pretty(config)?;

        bounded(
            self.timeout,
            "mkdir",
            &self.dir,
            self.platform.create_dir_all(&self.dir),
        )
        .await?;

        let temp = temp_path(&self.dir);
        bounded(self.timeout, "write", &temp, self.platform.write(&temp, &json)).await?;
        if let Err(e) = bounded(
            self.timeout,
            "rename",
            &path,
            self.platform.rename(&temp, &path),
        )
        .await
        {
            if let Err(cleanup) = self.platform.remove_file(&temp).await {
                tracing::debug!(path = %temp.display(), error = %cleanup, "temp file left behind");
            }
            return Err(e);
        }
        Ok(())
    }

    pub async fn storage_path(&self) -> Result<Option<Location>, StoreError> {
        Ok(self.load().await?.storage_path)
    }

    /// Update only the storage path, keeping other settings
    pub async fn set_storage_path(&self, location: Option<&Location>) -> Result<(), StoreError> {
        let mut config = self.load().await?;
        config.storage_path = location.cloned();
        self.save(&config).await
    }
}

fn temp_path(dir: &Path) -> PathBuf {
    dir.join(format!(
        ".{}.{}.tmp",
        CONFIG_FILE_NAME,
        uuid::Uuid::new_v4().simple()
    ))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
