// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Persistence engine for chops
//!
//! Slice bindings load once from the chosen backend and forward user
//! changes to it. In file mode the changes pass through the write
//! coalescer, which debounces them into ordered flushes of the shared
//! document at the location the resolver points to.

mod backend;
mod binding;
mod coalescer;
mod config;
mod error;
mod persistence;
mod resolver;
mod state;

pub use backend::{FileBackedStore, KeyValueFallbackStore, PersistenceBackend, StorageMode};
pub use binding::SliceBinding;
pub use coalescer::WriteCoalescer;
pub use config::{PersistenceConfig, DEFAULT_DEBOUNCE};
pub use error::{BindingError, ImportError, ResolverError};
pub use persistence::{Persistence, StorageStatus};
pub use resolver::{LocationResolver, PICKER_TITLE, STORAGE_PATH_KEY};
pub use state::PracticeState;
