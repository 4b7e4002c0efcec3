// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous string key-value stores
//!
//! Used for the fast location cache and for the per-key fallback store
//! when no durable document location exists.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from key-value store operations
#[derive(Debug, Error)]
pub enum KvError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A small synchronous string store (the host's local storage)
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Remove a key. A missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), KvError>;
}
