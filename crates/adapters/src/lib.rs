// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Host capabilities the persistence core depends on
//!
//! The core never touches the filesystem, the user's folders or a
//! dialog directly. It is handed a [`Platform`] for async file access and
//! folder picking, and a [`KeyValueStore`] for small synchronous records.

pub mod kv;
pub mod platform;
pub mod traced;

pub use kv::{FileKeyValueStore, KeyValueStore, KvError, MemoryKeyValueStore};
pub use platform::{NativePlatform, Platform, PlatformError};
pub use traced::TracedPlatform;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use platform::{FakePlatform, PlatformCall};
