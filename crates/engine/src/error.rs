// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the persistence engine

use chops_adapters::{KvError, PlatformError};
use chops_core::BackupError;
use chops_storage::StoreError;
use thiserror::Error;

/// Errors from resolving or changing the storage location
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("could not determine the documents directory")]
    NoDocumentsDir,
    #[error("location cache error: {0}")]
    Cache(#[from] KvError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("storage location is managed by the host in local-storage mode")]
    Unsupported,
}

/// Errors from setting a known slice from untyped JSON
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("unknown slice: {0}")]
    UnknownSlice(String),
    #[error("{key} must be {expected}, got {found}")]
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors from importing a backup
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Backup(#[from] BackupError),
    #[error("invalid backup file format: {0}")]
    Slice(#[from] BindingError),
}
