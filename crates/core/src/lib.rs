// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chops-core: data model for the chops practice log
//!
//! This crate provides:
//! - The shared JSON [`Document`] keyed by slice name
//! - The storage [`Location`] that points at the document's directory
//! - The table of slices the practice application knows about
//! - The backup format used for export and import

pub mod backup;
pub mod document;
pub mod location;
pub mod slice;

pub use backup::{Backup, BackupError, BACKUP_VERSION};
pub use document::{Document, DocumentError};
pub use location::{Location, DATA_FILE_NAME, DEFAULT_FOLDER_NAME};
pub use slice::{KnownSlice, KNOWN_SLICES};
