// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error says what went wrong, why it might have happened, and how
//! to fix it.

use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct ChopsError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ChopsError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for ChopsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ChopsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures users can act on.
impl ChopsError {
    pub fn not_configured() -> Self {
        ChopsError::new("storage location not configured")
            .with_context("No folder has been chosen for the practice log yet")
            .with_suggestion("Use the default folder: chops storage setup")
            .with_suggestion("Pick a folder: chops storage setup <PATH>")
            .with_suggestion("Keep data in local storage instead: chops --local-storage ...")
    }

    pub fn local_storage_mode() -> Self {
        ChopsError::new("storage location cannot be changed in local-storage mode")
            .with_context("Each slice is stored under its own key; there is no data folder")
            .with_suggestion("Run the command without --local-storage")
    }

    pub fn no_documents_dir() -> Self {
        ChopsError::new("could not determine the documents directory")
            .with_context("The default location lives under your documents directory")
            .with_suggestion("Pass a folder explicitly: chops storage setup <PATH>")
            .with_suggestion("Or set CHOPS_DOCUMENTS_DIR")
    }

    pub fn no_cache_dir() -> Self {
        ChopsError::new("could not determine the cache directory")
            .with_suggestion("Set CHOPS_CACHE_DIR to a writable directory")
    }

    pub fn invalid_json<E: std::error::Error + Send + Sync + 'static>(key: &str, source: E) -> Self {
        ChopsError::new(format!("value for {} is not valid JSON", key))
            .with_context(source.to_string())
            .with_suggestion("Quote strings as JSON: chops set colorTheme '\"violet\"'")
            .with_source(source)
    }

    pub fn invalid_value<E: std::error::Error + Send + Sync + 'static>(source: E) -> Self {
        ChopsError::new(source.to_string())
            .with_suggestion("Show the current value: chops get <KEY>")
            .with_source(source)
    }

    pub fn invalid_backup<E: std::error::Error + Send + Sync + 'static>(
        path: &Path,
        source: E,
    ) -> Self {
        ChopsError::new(format!("cannot import {}", path.display()))
            .with_context(source.to_string())
            .with_suggestion("Use a file written by: chops export")
            .with_source(source)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
