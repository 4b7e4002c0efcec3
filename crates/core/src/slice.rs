// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slices the practice application keeps in the document

use serde_json::{json, Value};

pub const PRACTICE_ITEMS: &str = "practiceItems";
pub const ARCHIVED_ITEMS: &str = "archivedItems";
pub const SESSION_QUEUE: &str = "sessionQueue";
pub const PRACTICE_SESSIONS: &str = "practiceSessions";
pub const SESSION_RECORDINGS: &str = "sessionRecordings";
pub const SESSION_TOTAL_TIME: &str = "sessionTotalTime";
pub const USER_TAGS: &str = "userTags";
pub const COLOR_THEME: &str = "colorTheme";

/// A slice name with its default value and backup membership
#[derive(Debug, Clone, Copy)]
pub struct KnownSlice {
    pub key: &'static str,
    default: fn() -> Value,
    /// Included in backups
    pub exported: bool,
    /// Replaced when a backup is imported
    pub restored: bool,
    /// A backup without this slice is rejected
    pub required_in_backup: bool,
}

impl KnownSlice {
    pub fn default_value(&self) -> Value {
        (self.default)()
    }
}

fn empty_list() -> Value {
    json!([])
}

fn zero() -> Value {
    json!(0)
}

fn violet() -> Value {
    json!("violet")
}

pub const KNOWN_SLICES: &[KnownSlice] = &[
    KnownSlice {
        key: PRACTICE_ITEMS,
        default: empty_list,
        exported: true,
        restored: true,
        required_in_backup: true,
    },
    KnownSlice {
        key: ARCHIVED_ITEMS,
        default: empty_list,
        exported: true,
        restored: true,
        required_in_backup: false,
    },
    KnownSlice {
        key: SESSION_QUEUE,
        default: empty_list,
        exported: false,
        restored: false,
        required_in_backup: false,
    },
    KnownSlice {
        key: PRACTICE_SESSIONS,
        default: empty_list,
        exported: true,
        restored: true,
        required_in_backup: true,
    },
    KnownSlice {
        key: SESSION_RECORDINGS,
        default: empty_list,
        exported: false,
        restored: false,
        required_in_backup: false,
    },
    KnownSlice {
        key: SESSION_TOTAL_TIME,
        default: zero,
        exported: false,
        restored: false,
        required_in_backup: false,
    },
    KnownSlice {
        key: USER_TAGS,
        default: empty_list,
        exported: true,
        restored: true,
        required_in_backup: false,
    },
    KnownSlice {
        key: COLOR_THEME,
        default: violet,
        exported: true,
        restored: false,
        required_in_backup: false,
    },
];

/// Look up a known slice by key
pub fn lookup(key: &str) -> Option<&'static KnownSlice> {
    KNOWN_SLICES.iter().find(|s| s.key == key)
}

/// Slices that appear in backups, in table order
pub fn exported() -> impl Iterator<Item = &'static KnownSlice> {
    KNOWN_SLICES.iter().filter(|s| s.exported)
}

/// Slices an import replaces. The theme travels in backups but stays a
/// per-device preference.
pub fn restored() -> impl Iterator<Item = &'static KnownSlice> {
    KNOWN_SLICES.iter().filter(|s| s.restored)
}

#[cfg(test)]
#[path = "slice_tests.rs"]
mod tests;
