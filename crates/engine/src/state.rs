// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The practice application's slices, bound together
//!
//! Export reads every backed-up slice; import replaces them all in one
//! step so that the changes land in a single debounce window.

use crate::backend::PersistenceBackend;
use crate::binding::SliceBinding;
use crate::error::{BindingError, ImportError};
use chops_core::slice::{self, KnownSlice};
use chops_core::{Backup, KNOWN_SLICES};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::sync::Arc;

/// A binding for every known slice, sharing one backend
pub struct PracticeState {
    slices: Vec<(&'static KnownSlice, SliceBinding<Value>)>,
}

impl PracticeState {
    /// Bind all known slices and start loading them
    pub fn bind(backend: Arc<dyn PersistenceBackend>) -> Self {
        let slices = KNOWN_SLICES
            .iter()
            .map(|known| {
                let binding =
                    SliceBinding::bind(Arc::clone(&backend), known.key, known.default_value());
                (known, binding)
            })
            .collect();
        Self { slices }
    }

    /// Wait until every slice has loaded
    pub async fn loaded(&self) {
        for (_, binding) in &self.slices {
            binding.loaded().await;
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slices.iter().all(|(_, binding)| binding.is_loaded())
    }

    pub fn slice(&self, key: &str) -> Option<&SliceBinding<Value>> {
        self.slices
            .iter()
            .find(|(known, _)| known.key == key)
            .map(|(_, binding)| binding)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.slice(key).map(SliceBinding::get)
    }

    /// Set a known slice, checking the value has the slice's JSON type
    pub fn set(&self, key: &str, value: Value) -> Result<(), BindingError> {
        let (known, binding) = self
            .slices
            .iter()
            .find(|(known, _)| known.key == key)
            .ok_or_else(|| BindingError::UnknownSlice(key.to_string()))?;
        check_kind(known, &value)?;
        binding.set(value);
        Ok(())
    }

    /// Current value of every slice
    pub fn snapshot(&self) -> Map<String, Value> {
        self.slices
            .iter()
            .map(|(known, binding)| (known.key.to_string(), binding.get()))
            .collect()
    }

    /// Backup of the exported slices taken at `at`
    pub fn export(&self, at: DateTime<Utc>) -> Backup {
        let slices = slice::exported()
            .filter_map(|known| Some((known.key.to_string(), self.get(known.key)?)))
            .collect();
        Backup::new(slices, at)
    }

    /// Replace the restorable slices from `backup`.
    ///
    /// Nothing is changed unless the whole backup is valid. Optional slices
    /// absent from the backup go back to their defaults; the theme is left
    /// alone.
    pub fn import(&self, backup: &Backup) -> Result<(), ImportError> {
        backup.validate()?;

        let mut planned = Vec::new();
        for known in slice::restored() {
            let value = match backup.slices.get(known.key) {
                None | Some(Value::Null) => known.default_value(),
                Some(value) => {
                    check_kind(known, value)?;
                    value.clone()
                }
            };
            if let Some(binding) = self.slice(known.key) {
                planned.push((binding, value));
            }
        }

        for (binding, value) in planned {
            binding.set(value);
        }
        tracing::info!(version = %backup.version, "imported backup");
        Ok(())
    }
}

fn check_kind(known: &KnownSlice, value: &Value) -> Result<(), BindingError> {
    let expected = kind(&known.default_value());
    let found = kind(value);
    if expected == found {
        Ok(())
    } else {
        Err(BindingError::TypeMismatch {
            key: known.key,
            expected,
            found,
        })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
