// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backup file format for export and import

use crate::slice;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Format version written into every backup
pub const BACKUP_VERSION: &str = "1.0";

/// Errors from reading a backup
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid backup file format: missing {0}")]
    MissingSlice(&'static str),
}

/// A snapshot of the exported slices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(flatten)]
    pub slices: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    BACKUP_VERSION.to_string()
}

impl Backup {
    pub fn new(slices: Map<String, Value>, exported_at: DateTime<Utc>) -> Self {
        Self {
            slices,
            exported_at: Some(exported_at),
            version: BACKUP_VERSION.to_string(),
        }
    }

    /// Parse and validate a backup file's contents
    pub fn parse(text: &str) -> Result<Self, BackupError> {
        let backup: Backup = serde_json::from_str(text)?;
        backup.validate()?;
        Ok(backup)
    }

    /// Check that every slice a backup must carry is present
    pub fn validate(&self) -> Result<(), BackupError> {
        for required in slice::KNOWN_SLICES.iter().filter(|s| s.required_in_backup) {
            match self.slices.get(required.key) {
                None | Some(Value::Null) => return Err(BackupError::MissingSlice(required.key)),
                Some(_) => {}
            }
        }
        Ok(())
    }

    pub fn to_pretty_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested file name for a backup taken on `date`
    pub fn file_name(date: NaiveDate) -> String {
        format!("practice-log-backup-{}.json", date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod tests;
