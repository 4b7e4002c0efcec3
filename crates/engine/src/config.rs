// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence tuning

use std::time::Duration;

/// Quiet period after the last change before a batch is flushed
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

// Env vars in milliseconds
fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Timing knobs for the persistence core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistenceConfig {
    pub debounce: Duration,
    /// Bound on each document or config file operation
    pub io_timeout: Duration,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            io_timeout: chops_storage::DEFAULT_IO_TIMEOUT,
        }
    }
}

impl PersistenceConfig {
    /// Defaults overridden by `CHOPS_DEBOUNCE_MS` and `CHOPS_IO_TIMEOUT_MS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            debounce: parse_duration_ms("CHOPS_DEBOUNCE_MS").unwrap_or(defaults.debounce),
            io_timeout: parse_duration_ms("CHOPS_IO_TIMEOUT_MS").unwrap_or(defaults.io_timeout),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
