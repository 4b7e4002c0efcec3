// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup wiring for the persistence core

use crate::backend::{FileBackedStore, KeyValueFallbackStore, PersistenceBackend, StorageMode};
use crate::binding::SliceBinding;
use crate::coalescer::WriteCoalescer;
use crate::config::PersistenceConfig;
use crate::error::ResolverError;
use crate::resolver::LocationResolver;
use crate::state::PracticeState;
use chops_adapters::{KeyValueStore, Platform};
use chops_core::Location;
use chops_storage::{ConfigStore, DocumentStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Whether and where data is being persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageStatus {
    pub mode: StorageMode,
    /// Always true in local-storage mode
    pub configured: bool,
    pub location: Option<Location>,
}

/// The backend chosen at startup plus the location controls that go with it
pub struct Persistence<P, K> {
    backend: Arc<dyn PersistenceBackend>,
    resolver: Option<LocationResolver<P, K>>,
    coalescer: Option<WriteCoalescer>,
}

impl<P: Platform, K: KeyValueStore> Persistence<P, K> {
    /// Document-backed persistence, with the location cache restored from
    /// the durable config record. Must be called from within a tokio runtime.
    pub async fn file_backed(
        platform: P,
        cache: K,
        config: &PersistenceConfig,
    ) -> Result<Self, ResolverError> {
        let store = DocumentStore::with_timeout(platform.clone(), config.io_timeout);
        let records = ConfigStore::for_platform(platform)?.with_timeout(config.io_timeout);
        let resolver = LocationResolver::new(store, cache, records);

        if let Err(e) = resolver.restore().await {
            tracing::warn!(error = %e, "could not restore storage location");
        }

        let coalescer = WriteCoalescer::spawn(resolver.clone(), config.debounce);
        let backend = FileBackedStore::new(resolver.clone(), coalescer.clone());
        Ok(Self {
            backend: Arc::new(backend),
            resolver: Some(resolver),
            coalescer: Some(coalescer),
        })
    }

    /// Per-key persistence for hosts without a usable filesystem
    pub fn local_storage(kv: K) -> Self {
        Self {
            backend: Arc::new(KeyValueFallbackStore::new(kv)),
            resolver: None,
            coalescer: None,
        }
    }

    pub fn mode(&self) -> StorageMode {
        self.backend.mode()
    }

    pub fn backend(&self) -> Arc<dyn PersistenceBackend> {
        Arc::clone(&self.backend)
    }

    pub fn status(&self) -> StorageStatus {
        match &self.resolver {
            Some(resolver) => {
                let location = resolver.get();
                StorageStatus {
                    mode: self.mode(),
                    configured: location.is_some(),
                    location,
                }
            }
            None => StorageStatus {
                mode: self.mode(),
                configured: true,
                location: None,
            },
        }
    }

    pub fn resolver(&self) -> Result<&LocationResolver<P, K>, ResolverError> {
        self.resolver.as_ref().ok_or(ResolverError::Unsupported)
    }

    /// Bind one slice to this backend
    pub fn bind<T>(&self, key: &str, default: T) -> SliceBinding<T>
    where
        T: Serialize + DeserializeOwned + Clone + Send + 'static,
    {
        SliceBinding::bind(self.backend(), key, default)
    }

    /// Bind every slice the practice application uses
    pub fn bind_practice(&self) -> PracticeState {
        PracticeState::bind(self.backend())
    }

    pub async fn setup(&self, custom: Option<Location>) -> Result<Location, ResolverError> {
        let resolver = self.resolver()?;
        self.backend.flush().await;
        resolver.setup(custom).await
    }

    pub async fn choose_folder(&self) -> Result<Option<Location>, ResolverError> {
        let resolver = self.resolver()?;
        self.backend.flush().await;
        resolver.choose_folder().await
    }

    /// Move the document to `target`, including changes still pending
    pub async fn migrate(&self, target: &Location) -> Result<(), ResolverError> {
        let resolver = self.resolver()?;
        self.backend.flush().await;
        resolver.migrate(target).await
    }

    /// Forget the location after writing out pending changes
    pub async fn reset(&self) -> Result<(), ResolverError> {
        let resolver = self.resolver()?;
        self.backend.flush().await;
        resolver.clear().await
    }

    pub async fn flush(&self) {
        self.backend.flush().await;
    }

    /// Final flush before the process exits
    pub async fn shutdown(&self) {
        match &self.coalescer {
            Some(coalescer) => coalescer.shutdown().await,
            None => self.backend.flush().await,
        }
    }
}

#[cfg(test)]
#[path = "persistence_tests.rs"]
mod tests;
