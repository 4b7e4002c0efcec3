// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage location: the directory that holds the document file

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the document inside a storage location
pub const DATA_FILE_NAME: &str = "practice-log-data.json";

/// Folder created under the user's documents directory by default
pub const DEFAULT_FOLDER_NAME: &str = "Music Practice Log";

/// A user-chosen (or default) directory holding the document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(PathBuf);

impl Location {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Default location under a documents directory
    pub fn default_in(documents_dir: &Path) -> Self {
        Self(documents_dir.join(DEFAULT_FOLDER_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Full path of the document file
    pub fn data_file(&self) -> PathBuf {
        self.0.join(DATA_FILE_NAME)
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for Location {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl AsRef<Path> for Location {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
