// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence factory for CLI commands

use crate::error::ChopsError;
use anyhow::Result;
use chops_adapters::{FileKeyValueStore, NativePlatform, Platform, TracedPlatform};
use chops_engine::{Persistence, PersistenceConfig, ResolverError};

/// File holding the location cache and, in local-storage mode, every slice
pub const LOCAL_STORAGE_FILE: &str = "local-storage.json";

pub type CliPlatform = TracedPlatform<NativePlatform>;
pub type CliPersistence = Persistence<CliPlatform, FileKeyValueStore>;

/// Open persistence with real adapters
pub async fn open(local_storage: bool) -> Result<CliPersistence> {
    let platform = TracedPlatform::new(NativePlatform::new());
    let cache_dir = platform.cache_dir().ok_or_else(ChopsError::no_cache_dir)?;
    let kv = FileKeyValueStore::new(cache_dir.join(LOCAL_STORAGE_FILE));

    if local_storage {
        return Ok(Persistence::local_storage(kv));
    }
    Persistence::file_backed(platform, kv, &PersistenceConfig::from_env())
        .await
        .map_err(user_error)
}

/// Turn resolver failures users can act on into friendly errors
pub fn user_error(err: ResolverError) -> anyhow::Error {
    match err {
        ResolverError::Unsupported => ChopsError::local_storage_mode().into(),
        ResolverError::NoDocumentsDir => ChopsError::no_documents_dir().into(),
        other => other.into(),
    }
}

/// Fail unless file mode has a location (local storage always does)
pub fn require_configured(persistence: &CliPersistence) -> Result<()> {
    if persistence.status().configured {
        Ok(())
    } else {
        Err(ChopsError::not_configured().into())
    }
}
