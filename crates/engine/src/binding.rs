// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One slice of the document as in-memory state
//!
//! A binding moves through `unloaded -> loaded(pristine) -> loaded(dirty)`.
//! Loading happens once in the background. A binding only forwards its
//! value to the backend once it is both loaded and dirty, so hydrating
//! from disk never causes a write.

use crate::backend::PersistenceBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

struct State<T> {
    value: T,
    loaded: bool,
    modified: bool,
}

/// Shared handle to one slice's value
pub struct SliceBinding<T> {
    key: Arc<str>,
    state: Arc<Mutex<State<T>>>,
    backend: Arc<dyn PersistenceBackend>,
    loaded: watch::Receiver<bool>,
}

impl<T> Clone for SliceBinding<T> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            state: Arc::clone(&self.state),
            backend: Arc::clone(&self.backend),
            loaded: self.loaded.clone(),
        }
    }
}

impl<T> SliceBinding<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + 'static,
{
    /// Bind `key` with `default` and start loading it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(backend: Arc<dyn PersistenceBackend>, key: &str, default: T) -> Self {
        let (loaded_tx, loaded) = watch::channel(false);
        let binding = Self {
            key: Arc::from(key),
            state: Arc::new(Mutex::new(State {
                value: default,
                loaded: false,
                modified: false,
            })),
            backend,
            loaded,
        };

        let loader = binding.clone();
        tokio::spawn(async move {
            let stored = loader.backend.load(&loader.key).await;
            loader.finish_load(stored);
            let _ = loaded_tx.send(true);
        });

        binding
    }

    fn finish_load(&self, stored: Option<serde_json::Value>) {
        let mut state = self.lock();
        if state.modified {
            // A change made while loading wins over the stored value
            tracing::debug!(key = %self.key, "slice changed before load completed");
            state.loaded = true;
            self.forward(&state.value);
            return;
        }
        if let Some(stored) = stored {
            match serde_json::from_value(stored) {
                Ok(value) => state.value = value,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "ignoring stored value")
                }
            }
        }
        state.loaded = true;
        tracing::debug!(key = %self.key, "slice loaded");
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current value (the default until loaded)
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Borrow the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().loaded
    }

    /// Whether `set` or `update` has ever been called
    pub fn is_modified(&self) -> bool {
        self.lock().modified
    }

    /// Wait for the initial load to finish
    pub async fn loaded(&self) {
        let mut rx = self.loaded.clone();
        // An error means the loader is gone; nothing left to wait for
        let _ = rx.wait_for(|loaded| *loaded).await;
    }

    /// Replace the value
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Change the value in place
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut state = self.lock();
        f(&mut state.value);
        state.modified = true;
        if state.loaded {
            self.forward(&state.value);
        }
    }

    fn forward(&self, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => self.backend.save(&self.key, json),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "slice not serializable"),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
