// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Debounced, serialized writes onto the shared document
//!
//! Slice changes land in a pending batch keyed by slice name. Each change
//! restarts the debounce timer; when it expires the batch is handed to a
//! single worker task that runs read, merge and write for one batch at a
//! time, in the order batches were handed over.

use crate::resolver::LocationResolver;
use chops_adapters::{KeyValueStore, Platform};
use chops_core::Document;
use chops_storage::StoreError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

type Batch = BTreeMap<String, Value>;

struct FlushJob {
    batch: Batch,
    /// Signalled once this job and every job before it has run
    done: Option<oneshot::Sender<()>>,
}

struct Shared {
    pending: Mutex<Batch>,
    timer: Mutex<Option<JoinHandle<()>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    jobs: mpsc::UnboundedSender<FlushJob>,
    runtime: Handle,
    debounce: Duration,
    flushes: AtomicU64,
}

impl Shared {
    /// Move the pending batch onto the queue.
    ///
    /// The send happens under the pending lock so batches reach the queue
    /// in the order they were taken.
    fn enqueue(&self, done: Option<oneshot::Sender<()>>) {
        let mut pending = lock(&self.pending);
        let batch = std::mem::take(&mut *pending);
        if batch.is_empty() && done.is_none() {
            return;
        }
        tracing::debug!(keys = batch.len(), "queueing flush");
        if let Err(mpsc::error::SendError(job)) = self.jobs.send(FlushJob { batch, done }) {
            tracing::warn!(keys = job.batch.len(), "write queue stopped, dropping batch");
        }
    }

    /// Restart the debounce timer
    fn schedule(self: &Arc<Self>) {
        let shared = Arc::clone(self);
        let mut timer = lock(&self.timer);
        if let Some(previous) = timer.take() {
            previous.abort();
        }
        *timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(shared.debounce).await;
            shared.enqueue(None);
        }));
    }

    /// Return a failed batch to the pending set without overwriting newer
    /// values, and retry after the debounce
    fn requeue(self: &Arc<Self>, batch: Batch) {
        {
            let mut pending = lock(&self.pending);
            for (key, value) in batch {
                pending.entry(key).or_insert(value);
            }
        }
        self.schedule();
    }

    fn cancel_timer(&self) {
        if let Some(timer) = lock(&self.timer).take() {
            timer.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Collapses bursts of slice changes into ordered document flushes
#[derive(Clone)]
pub struct WriteCoalescer {
    shared: Arc<Shared>,
}

impl WriteCoalescer {
    /// Start the flush worker. Must be called from within a tokio runtime.
    pub fn spawn<P, K>(resolver: LocationResolver<P, K>, debounce: Duration) -> Self
    where
        P: Platform,
        K: KeyValueStore,
    {
        let (jobs, rx) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared {
            pending: Mutex::default(),
            timer: Mutex::new(None),
            worker: Mutex::new(None),
            jobs,
            runtime: Handle::current(),
            debounce,
            flushes: AtomicU64::new(0),
        });

        // The worker holds a weak handle so dropping the last coalescer
        // closes the queue and ends it
        let worker = shared
            .runtime
            .spawn(run_worker(resolver, rx, Arc::downgrade(&shared)));
        *lock(&shared.worker) = Some(worker);

        Self { shared }
    }

    /// Record `value` as the newest value for `key` and restart the timer
    pub fn notify(&self, key: &str, value: Value) {
        lock(&self.shared.pending).insert(key.to_string(), value);
        tracing::debug!(key, "slice changed");
        self.shared.schedule();
    }

    /// Flush the pending batch now and wait for the queue to drain
    pub async fn flush(&self) {
        self.shared.cancel_timer();
        let (tx, rx) = oneshot::channel();
        self.shared.enqueue(Some(tx));
        // An error means the worker is gone and there is nothing to wait for
        let _ = rx.await;
    }

    /// Flush, then stop the worker. Later changes are dropped.
    pub async fn shutdown(&self) {
        self.flush().await;
        if let Some(worker) = lock(&self.shared.worker).take() {
            worker.abort();
        }
        self.shared.cancel_timer();
        tracing::debug!("write queue stopped");
    }

    /// Number of batches written to the document
    pub fn flush_count(&self) -> u64 {
        self.shared.flushes.load(Ordering::SeqCst)
    }

    /// Number of slices waiting for the next flush
    pub fn pending_len(&self) -> usize {
        lock(&self.shared.pending).len()
    }
}

async fn run_worker<P, K>(
    resolver: LocationResolver<P, K>,
    mut rx: mpsc::UnboundedReceiver<FlushJob>,
    shared: Weak<Shared>,
) where
    P: Platform,
    K: KeyValueStore,
{
    while let Some(job) = rx.recv().await {
        if !job.batch.is_empty() {
            let outcome = flush_batch(&resolver, &job.batch).await;
            if let Some(shared) = shared.upgrade() {
                match outcome {
                    Flushed::Written => {
                        shared.flushes.fetch_add(1, Ordering::SeqCst);
                    }
                    Flushed::Skipped => {}
                    Flushed::Failed => shared.requeue(job.batch),
                }
            }
        }
        if let Some(done) = job.done {
            let _ = done.send(());
        }
    }
}

enum Flushed {
    Written,
    /// No location configured
    Skipped,
    /// Not persisted; the batch goes back to pending
    Failed,
}

/// Read, merge and write one batch
async fn flush_batch<P, K>(resolver: &LocationResolver<P, K>, batch: &Batch) -> Flushed
where
    P: Platform,
    K: KeyValueStore,
{
    let Some(location) = resolver.get() else {
        tracing::debug!(keys = batch.len(), "no storage location, skipping flush");
        return Flushed::Skipped;
    };
    let store = resolver.store();

    let mut doc = match store.try_read(&location).await {
        Ok(Some(doc)) => doc,
        Ok(None) => Document::new(),
        Err(StoreError::Document(e)) => {
            tracing::warn!(%location, error = %e, "replacing unreadable document");
            Document::new()
        }
        Err(e) => {
            // Writing now would drop every key not in this batch
            tracing::warn!(%location, error = %e, "flush abandoned, document not readable");
            return Flushed::Failed;
        }
    };

    doc.merge(batch.iter().map(|(k, v)| (k.clone(), v.clone())));

    match store.write(&location, &doc).await {
        Ok(()) => {
            tracing::debug!(%location, keys = batch.len(), "flushed");
            Flushed::Written
        }
        Err(e) => {
            tracing::warn!(%location, error = %e, "flush failed");
            Flushed::Failed
        }
    }
}

#[cfg(test)]
#[path = "coalescer_tests.rs"]
mod tests;
