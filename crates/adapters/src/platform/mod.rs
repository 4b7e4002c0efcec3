// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem, folder-picker and well-known directory capabilities

mod native;

pub use native::NativePlatform;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePlatform, PlatformCall};

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("{op} failed for {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("folder picker failed: {0}")]
    Picker(String),
}

impl PlatformError {
    pub(crate) fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Host capabilities used by the persistence core
#[async_trait]
pub trait Platform: Clone + Send + Sync + 'static {
    /// Read a text file. Returns `Ok(None)` if the file does not exist.
    async fn read_to_string(&self, path: &Path) -> Result<Option<String>, PlatformError>;

    /// Create or truncate a file with the given contents
    async fn write(&self, path: &Path, contents: &str) -> Result<(), PlatformError>;

    /// Replace `to` with `from`
    async fn rename(&self, from: &Path, to: &Path) -> Result<(), PlatformError>;

    /// Remove a file. A missing file is not an error.
    async fn remove_file(&self, path: &Path) -> Result<(), PlatformError>;

    /// Create a directory and its parents. An existing directory is not an error.
    async fn create_dir_all(&self, path: &Path) -> Result<(), PlatformError>;

    /// Ask the user for a directory.
    ///
    /// Returns `Ok(None)` when the user dismisses the picker. Has no
    /// timeout: the call waits for as long as the user takes.
    async fn pick_folder(
        &self,
        title: &str,
        default: Option<&Path>,
    ) -> Result<Option<PathBuf>, PlatformError>;

    /// The user's documents directory
    fn documents_dir(&self) -> Option<PathBuf>;

    /// Directory for application configuration
    fn config_dir(&self) -> Option<PathBuf>;

    /// Directory for caches
    fn cache_dir(&self) -> Option<PathBuf>;
}
