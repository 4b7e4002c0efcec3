// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document file reads and writes

use crate::{bounded, StoreError, DEFAULT_IO_TIMEOUT};
use chops_adapters::Platform;
use chops_core::{Document, Location, DATA_FILE_NAME};
use std::path::PathBuf;
use std::time::Duration;

/// Reads and writes the document file in a storage location.
///
/// Every platform call is bounded by `timeout`. Reads never fail: a
/// missing, unreadable, corrupt or slow file yields an empty document.
/// Writes go to a temp file in the target directory and are renamed into
/// place, so a reader sees either the old document or the new one.
#[derive(Clone)]
pub struct DocumentStore<P> {
    platform: P,
    timeout: Duration,
}

impl<P: Platform> DocumentStore<P> {
    pub fn new(platform: P) -> Self {
        Self::with_timeout(platform, DEFAULT_IO_TIMEOUT)
    }

    pub fn with_timeout(platform: P, timeout: Duration) -> Self {
        Self { platform, timeout }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Read the document at `location`, or an empty one
    pub async fn read(&self, location: &Location) -> Document {
        match self.try_read(location).await {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                tracing::debug!(%location, "no document yet");
                Document::new()
            }
            Err(e) => {
                tracing::warn!(%location, error = %e, "treating document as empty");
                Document::new()
            }
        }
    }

    /// Read the document, distinguishing "missing" from failure
    pub async fn try_read(&self, location: &Location) -> Result<Option<Document>, StoreError> {
        let path = location.data_file();
        let text = bounded(
            self.timeout,
            "read",
            &path,
            self.platform.read_to_string(&path),
        )
        .await?;

        match text {
            Some(text) => Ok(Some(Document::parse(&text)?)),
            None => Ok(None),
        }
    }

    /// Replace the document at `location`
    pub async fn write(&self, location: &Location, doc: &Document) -> Result<(), StoreError> {
        let content = doc.to_pretty_json()?;
        self.ensure_dir(location).await;

        let target = location.data_file();
        let temp = temp_path(location);

        bounded(
            self.timeout,
            "write",
            &temp,
            self.platform.write(&temp, &content),
        )
        .await?;

        if let Err(e) = bounded(
            self.timeout,
            "rename",
            &target,
            self.platform.rename(&temp, &target),
        )
        .await
        {
            if let Err(cleanup) = self.platform.remove_file(&temp).await {
                tracing::debug!(path = %temp.display(), error = %cleanup, "temp file left behind");
            }
            return Err(e);
        }

        tracing::debug!(%location, slices = doc.len(), "document written");
        Ok(())
    }

    /// Create the location directory if needed.
    ///
    /// Failure is only logged; the write that follows reports the real error.
    async fn ensure_dir(&self, location: &Location) {
        let result = bounded(
            self.timeout,
            "mkdir",
            location.path(),
            self.platform.create_dir_all(location.path()),
        )
        .await;
        if let Err(e) = result {
            tracing::debug!(%location, error = %e, "could not ensure storage directory");
        }
    }
}

fn temp_path(location: &Location) -> PathBuf {
    location.path().join(format!(
        ".{}.{}.tmp",
        DATA_FILE_NAME,
        uuid::Uuid::new_v4().simple()
    ))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
