// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced platform wrapper for consistent observability

use crate::platform::{Platform, PlatformError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::Instrument;

/// Wrapper that adds tracing to any Platform
#[derive(Clone)]
pub struct TracedPlatform<P> {
    inner: P,
}

impl<P> TracedPlatform<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: Platform> Platform for TracedPlatform<P> {
    async fn read_to_string(&self, path: &Path) -> Result<Option<String>, PlatformError> {
        let span = tracing::debug_span!("platform.read", path = %path.display());
        async {
            let start = std::time::Instant::now();
            let result = self.inner.read_to_string(path).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(Some(content)) => {
                    tracing::debug!(bytes = content.len(), elapsed_ms, "read")
                }
                Ok(None) => tracing::debug!(elapsed_ms, "file not found"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "read failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), PlatformError> {
        let span = tracing::debug_span!("platform.write", path = %path.display());
        async {
            let start = std::time::Instant::now();
            let result = self.inner.write(path, contents).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::debug!(bytes = contents.len(), elapsed_ms, "written"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "write failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), PlatformError> {
        let span = tracing::debug_span!(
            "platform.rename",
            from = %from.display(),
            to = %to.display()
        );
        async {
            let result = self.inner.rename(from, to).await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "rename failed");
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn remove_file(&self, path: &Path) -> Result<(), PlatformError> {
        let result = self.inner.remove_file(path).await;
        match &result {
            Ok(()) => tracing::debug!(path = %path.display(), "removed"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "remove failed"),
        }
        result
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), PlatformError> {
        let result = self.inner.create_dir_all(path).await;
        // mkdir failing is tolerated upstream; the write that follows reports the real error
        match &result {
            Ok(()) => tracing::trace!(path = %path.display(), "directory ensured"),
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "mkdir failed"),
        }
        result
    }

    async fn pick_folder(
        &self,
        title: &str,
        default: Option<&Path>,
    ) -> Result<Option<PathBuf>, PlatformError> {
        let span = tracing::info_span!("platform.pick_folder", title);
        async {
            let result = self.inner.pick_folder(title, default).await;
            match &result {
                Ok(Some(path)) => tracing::info!(path = %path.display(), "folder picked"),
                Ok(None) => tracing::info!("picker cancelled"),
                Err(e) => tracing::warn!(error = %e, "picker failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    fn documents_dir(&self) -> Option<PathBuf> {
        self.inner.documents_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.inner.config_dir()
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        self.inner.cache_dir()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
