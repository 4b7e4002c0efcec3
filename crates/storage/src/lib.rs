// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Durable storage for the chops document and its location record

mod config;
mod document;
mod error;

pub use config::{AppConfig, ConfigStore, CONFIG_FILE_NAME};
pub use document::DocumentStore;
pub use error::StoreError;

use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// Default bound on a single file operation
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Run one platform operation with a deadline
pub(crate) async fn bounded<T, F>(
    timeout: Duration,
    op: &'static str,
    path: &Path,
    fut: F,
) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, chops_adapters::PlatformError>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(StoreError::Timeout {
            op,
            path: path.to_path_buf(),
            timeout,
        }),
    }
}
