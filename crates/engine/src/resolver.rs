// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where the document lives
//!
//! The location is kept in two places: a fast synchronous cache read at
//! startup, and the durable config record that survives a cleared cache.
//! The cache is always written after the durable record.

use crate::error::ResolverError;
use chops_adapters::{KeyValueStore, Platform};
use chops_core::{Document, Location};
use chops_storage::{ConfigStore, DocumentStore, StoreError};

/// Cache key holding the configured directory
pub const STORAGE_PATH_KEY: &str = "practiceLog_storagePath";

/// Title shown by the folder picker
pub const PICKER_TITLE: &str = "Choose where to store your practice data";

/// Resolves, records and changes the storage location
#[derive(Clone)]
pub struct LocationResolver<P, K> {
    store: DocumentStore<P>,
    cache: K,
    config: ConfigStore<P>,
}

impl<P: Platform, K: KeyValueStore> LocationResolver<P, K> {
    pub fn new(store: DocumentStore<P>, cache: K, config: ConfigStore<P>) -> Self {
        Self {
            store,
            cache,
            config,
        }
    }

    pub fn store(&self) -> &DocumentStore<P> {
        &self.store
    }

    /// Current location from the fast cache
    pub fn get(&self) -> Option<Location> {
        match self.cache.get(STORAGE_PATH_KEY) {
            Ok(Some(path)) if !path.is_empty() => Some(Location::new(path)),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "location cache unreadable");
                None
            }
        }
    }

    /// Repopulate an empty cache from the durable record
    pub async fn restore(&self) -> Result<Option<Location>, ResolverError> {
        if let Some(location) = self.get() {
            return Ok(Some(location));
        }
        let Some(location) = self.config.storage_path().await? else {
            return Ok(None);
        };
        tracing::info!(%location, "restored storage location from config");
        self.cache
            .set(STORAGE_PATH_KEY, &location.path().to_string_lossy())?;
        Ok(Some(location))
    }

    /// Record `location` in the durable config and the cache
    pub async fn set(&self, location: &Location) -> Result<(), ResolverError> {
        self.config.set_storage_path(Some(location)).await?;
        self.cache
            .set(STORAGE_PATH_KEY, &location.path().to_string_lossy())?;
        tracing::info!(%location, "storage location set");
        Ok(())
    }

    /// Forget the location in both records
    pub async fn clear(&self) -> Result<(), ResolverError> {
        self.config.set_storage_path(None).await?;
        self.cache.remove(STORAGE_PATH_KEY)?;
        tracing::info!("storage location cleared");
        Ok(())
    }

    /// `<documents>/Music Practice Log`, not created
    pub fn resolve_default(&self) -> Result<Location, ResolverError> {
        let documents = self
            .store
            .platform()
            .documents_dir()
            .ok_or(ResolverError::NoDocumentsDir)?;
        Ok(Location::default_in(&documents))
    }

    /// Ask the user for a folder. `None` means the picker was dismissed.
    pub async fn pick_interactive(&self) -> Result<Option<Location>, ResolverError> {
        let default = self.resolve_default().ok();
        let picked = self
            .store
            .platform()
            .pick_folder(PICKER_TITLE, default.as_ref().map(Location::path))
            .await?;
        Ok(picked.map(Location::from))
    }

    /// Configure `custom`, or the default location when none is given.
    ///
    /// Only the pointer is saved; the directory appears on first write.
    pub async fn setup(&self, custom: Option<Location>) -> Result<Location, ResolverError> {
        let location = match custom {
            Some(location) => location,
            None => self.resolve_default()?,
        };
        self.set(&location).await?;
        Ok(location)
    }

    /// Pick a folder and configure it
    pub async fn choose_folder(&self) -> Result<Option<Location>, ResolverError> {
        match self.pick_interactive().await? {
            Some(location) => Ok(Some(self.setup(Some(location)).await?)),
            None => {
                tracing::debug!("folder picker cancelled");
                Ok(None)
            }
        }
    }

    /// Copy the document to `target` and repoint there.
    ///
    /// The pointer only moves after the copy is written. A source that
    /// cannot be read aborts the move rather than copying an empty document.
    pub async fn migrate(&self, target: &Location) -> Result<(), ResolverError> {
        let doc = match self.get() {
            Some(current) => match self.store.try_read(&current).await {
                Ok(doc) => doc.unwrap_or_default(),
                Err(StoreError::Document(e)) => {
                    tracing::warn!(location = %current, error = %e, "migrating over corrupt document");
                    Document::new()
                }
                Err(e) => return Err(e.into()),
            },
            None => Document::new(),
        };
        self.store.write(target, &doc).await?;
        self.set(target).await?;
        tracing::info!(%target, keys = doc.len(), "migrated document");
        Ok(())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
