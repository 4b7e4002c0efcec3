// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where slice values are loaded from and saved to
//!
//! Chosen once at startup: the file-backed document when the host has a
//! real filesystem, or one key-value entry per slice when it does not.

use crate::coalescer::WriteCoalescer;
use crate::resolver::LocationResolver;
use async_trait::async_trait;
use chops_adapters::{KeyValueStore, KvError, Platform};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Which backend is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageMode {
    File,
    LocalStorage,
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageMode::File => write!(f, "file"),
            StorageMode::LocalStorage => write!(f, "local-storage"),
        }
    }
}

/// Persistence seen by slice bindings
#[async_trait]
pub trait PersistenceBackend: Send + Sync + 'static {
    fn mode(&self) -> StorageMode;

    /// Stored value for `key`, or `None` when nothing usable is stored
    async fn load(&self, key: &str) -> Option<Value>;

    /// Record a user change. Never blocks on I/O and never fails.
    fn save(&self, key: &str, value: Value);

    /// Wait until every saved change is durable
    async fn flush(&self);
}

/// Slices live together in the document at the resolved location
pub struct FileBackedStore<P, K> {
    resolver: LocationResolver<P, K>,
    coalescer: WriteCoalescer,
}

impl<P: Platform, K: KeyValueStore> FileBackedStore<P, K> {
    pub fn new(resolver: LocationResolver<P, K>, coalescer: WriteCoalescer) -> Self {
        Self {
            resolver,
            coalescer,
        }
    }
}

#[async_trait]
impl<P: Platform, K: KeyValueStore> PersistenceBackend for FileBackedStore<P, K> {
    fn mode(&self) -> StorageMode {
        StorageMode::File
    }

    async fn load(&self, key: &str) -> Option<Value> {
        let location = self.resolver.get()?;
        let doc = self.resolver.store().read(&location).await;
        doc.get(key).cloned()
    }

    fn save(&self, key: &str, value: Value) {
        if self.resolver.get().is_none() {
            tracing::debug!(key, "no storage location, change not persisted");
            return;
        }
        self.coalescer.notify(key, value);
    }

    async fn flush(&self) {
        self.coalescer.flush().await;
    }
}

/// Each slice is a JSON string under its own key
pub struct KeyValueFallbackStore<K> {
    kv: K,
}

impl<K: KeyValueStore> KeyValueFallbackStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl<K: KeyValueStore> PersistenceBackend for KeyValueFallbackStore<K> {
    fn mode(&self) -> StorageMode {
        StorageMode::LocalStorage
    }

    async fn load(&self, key: &str) -> Option<Value> {
        let text = match self.kv.get(key) {
            Ok(text) => text?,
            Err(e) => {
                tracing::warn!(key, error = %e, "local storage unreadable");
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unparseable local storage entry");
                None
            }
        }
    }

    fn save(&self, key: &str, value: Value) {
        let result = serde_json::to_string(&value)
            .map_err(KvError::from)
            .and_then(|text| self.kv.set(key, &text));
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "local storage write failed");
        }
    }

    async fn flush(&self) {}
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
