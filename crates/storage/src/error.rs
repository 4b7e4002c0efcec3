// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for document and config storage

use chops_adapters::PlatformError;
use chops_core::DocumentError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while reading or writing stored files
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{op} timed out after {timeout:?}: {path}")]
    Timeout {
        op: &'static str,
        path: PathBuf,
        timeout: Duration,
    },
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("no config directory available on this platform")]
    NoConfigDir,
}
