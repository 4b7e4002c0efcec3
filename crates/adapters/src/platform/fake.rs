// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake platform for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Platform, PlatformError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded platform call
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Read { path: PathBuf },
    Write { path: PathBuf, contents: String },
    Rename { from: PathBuf, to: PathBuf },
    Remove { path: PathBuf },
    CreateDir { path: PathBuf },
    PickFolder { title: String, default: Option<PathBuf> },
}

#[derive(Default)]
struct FakeFs {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
}

impl FakeFs {
    fn add_dir(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.dirs.contains(parent),
            _ => true,
        }
    }
}

/// In-memory filesystem with scripted folder-picker answers.
///
/// Every filesystem operation sleeps for the configured latency first, so
/// tests running with paused tokio time can hold an operation in flight or
/// push it past a timeout.
#[derive(Clone)]
pub struct FakePlatform {
    fs: Arc<Mutex<FakeFs>>,
    calls: Arc<Mutex<Vec<PlatformCall>>>,
    picks: Arc<Mutex<VecDeque<Option<PathBuf>>>>,
    latency: Arc<Mutex<Duration>>,
    fail_reads: Arc<AtomicBool>,
    unreadable: Arc<Mutex<HashSet<PathBuf>>>,
    fail_writes: Arc<AtomicBool>,
    fail_renames: Arc<AtomicBool>,
    documents: Option<PathBuf>,
    config: Option<PathBuf>,
    cache: Option<PathBuf>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            fs: Arc::default(),
            calls: Arc::default(),
            picks: Arc::default(),
            latency: Arc::default(),
            fail_reads: Arc::default(),
            unreadable: Arc::default(),
            fail_writes: Arc::default(),
            fail_renames: Arc::default(),
            documents: Some(PathBuf::from("/home/user/Documents")),
            config: Some(PathBuf::from("/home/user/.config/chops")),
            cache: Some(PathBuf::from("/home/user/.cache/chops")),
        }
    }

    /// A platform that cannot tell where the documents directory is
    pub fn without_documents_dir(mut self) -> Self {
        self.documents = None;
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Number of files renamed onto `path` (one per completed atomic write)
    pub fn renames_onto(&self, path: &Path) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, PlatformCall::Rename { to, .. } if to == path))
            .count()
    }

    /// Get the contents of a file
    pub fn file(&self, path: &Path) -> Option<String> {
        self.fs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .files
            .get(path)
            .cloned()
    }

    /// Seed a file (and its parent directories)
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        let mut fs = self.fs.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(parent) = path.parent() {
            fs.add_dir(parent);
        }
        fs.files.insert(path, contents.into());
    }

    /// Paths of all files currently stored
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let fs = self.fs.lock().unwrap_or_else(|e| e.into_inner());
        let mut paths: Vec<_> = fs.files.keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.fs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .dirs
            .contains(path)
    }

    /// Queue the next folder-picker answer (`None` = user cancelled)
    pub fn push_pick(&self, answer: Option<PathBuf>) {
        self.picks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(answer);
    }

    /// Delay applied to every filesystem operation
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock().unwrap_or_else(|e| e.into_inner()) = latency;
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Fail reads of `path` only
    pub fn fail_reads_at(&self, path: impl Into<PathBuf>) {
        self.unreadable
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into());
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_renames(&self, fail: bool) {
        self.fail_renames.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: PlatformCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    async fn delay(&self) {
        let latency = *self.latency.lock().unwrap_or_else(|e| e.into_inner());
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    fn injected(op: &'static str, path: &Path) -> PlatformError {
        PlatformError::io(
            op,
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"),
        )
    }

    fn not_found(op: &'static str, path: &Path) -> PlatformError {
        PlatformError::io(
            op,
            path,
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        )
    }
}

#[async_trait]
impl Platform for FakePlatform {
    async fn read_to_string(&self, path: &Path) -> Result<Option<String>, PlatformError> {
        self.record(PlatformCall::Read {
            path: path.to_path_buf(),
        });
        self.delay().await;

        let unreadable = self
            .unreadable
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(path);
        if unreadable || self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::injected("read", path));
        }
        Ok(self.file(path))
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), PlatformError> {
        self.record(PlatformCall::Write {
            path: path.to_path_buf(),
            contents: contents.to_string(),
        });
        self.delay().await;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected("write", path));
        }
        let mut fs = self.fs.lock().unwrap_or_else(|e| e.into_inner());
        if !fs.parent_exists(path) {
            return Err(Self::not_found("write", path));
        }
        fs.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), PlatformError> {
        self.record(PlatformCall::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        self.delay().await;

        if self.fail_renames.load(Ordering::SeqCst) {
            return Err(Self::injected("rename", to));
        }
        let mut fs = self.fs.lock().unwrap_or_else(|e| e.into_inner());
        let Some(contents) = fs.files.remove(from) else {
            return Err(Self::not_found("rename", from));
        };
        fs.files.insert(to.to_path_buf(), contents);
        Ok(())
    }

    async fn remove_file(&self, path: &Path) -> Result<(), PlatformError> {
        self.record(PlatformCall::Remove {
            path: path.to_path_buf(),
        });
        self.delay().await;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected("remove", path));
        }
        self.fs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .files
            .remove(path);
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), PlatformError> {
        self.record(PlatformCall::CreateDir {
            path: path.to_path_buf(),
        });
        self.delay().await;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected("mkdir", path));
        }
        self.fs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .add_dir(path);
        Ok(())
    }

    async fn pick_folder(
        &self,
        title: &str,
        default: Option<&Path>,
    ) -> Result<Option<PathBuf>, PlatformError> {
        self.record(PlatformCall::PickFolder {
            title: title.to_string(),
            default: default.map(Path::to_path_buf),
        });

        let answer = self
            .picks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        Ok(answer.flatten())
    }

    fn documents_dir(&self) -> Option<PathBuf> {
        self.documents.clone()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config.clone()
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        self.cache.clone()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
