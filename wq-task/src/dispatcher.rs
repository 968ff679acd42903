use std::{
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use anyhow::bail;
use serde::Serialize;
use tokio::{sync::Mutex, task::JoinSet};

use wq_common::{
    collection::BoundedCollection, config::config_enums::CollectionKind, error::Error,
    log_debug, log_error, log_finished, log_info,
};

use crate::job_handler::JobHandler;

pub type SharedCollection<T> = Arc<Mutex<Box<dyn BoundedCollection<T> + Send>>>;

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct DispatchSummary {
    pub kind: CollectionKind,
    pub capacity: String,
    pub handled: usize,
    pub failed: usize,
    // evicted by submits into a full collection
    pub evicted: usize,
    // still held when the last worker stopped, never dispatched
    pub stranded: usize,
}

impl fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kind: {}, capacity: {}, handled: {}, failed: {}, evicted: {}, stranded: {}",
            self.kind, self.capacity, self.handled, self.failed, self.evicted, self.stranded
        )
    }
}

#[derive(Default)]
struct WorkerStats {
    handled: usize,
    failed: usize,
}

/// Drives one collection with a pool of workers.
///
/// The collection has no locking of its own, every access goes through the
/// mutex here. A worker stops at the first `None`, and since the pull cursor
/// never restarts, so will every other worker: a dispatcher runs at most once,
/// and jobs submitted after that are left in the collection.
pub struct Dispatcher<T> {
    kind: CollectionKind,
    collection: SharedCollection<T>,
    handler: Arc<dyn JobHandler<T>>,
    worker_count: usize,
    evicted: AtomicUsize,
}

impl<T: Send + 'static> Dispatcher<T> {
    pub fn new(
        kind: CollectionKind,
        collection: Box<dyn BoundedCollection<T> + Send>,
        handler: Arc<dyn JobHandler<T>>,
        worker_count: usize,
    ) -> Self {
        Self {
            kind,
            collection: Arc::new(Mutex::new(collection)),
            handler,
            worker_count: worker_count.max(1),
            evicted: AtomicUsize::new(0),
        }
    }

    pub fn collection(&self) -> SharedCollection<T> {
        self.collection.clone()
    }

    /// Returns false if the job can no longer be dispatched.
    pub async fn submit(&self, job: T) -> bool {
        let mut collection = self.collection.lock().await;
        let before = collection.count();
        collection.insert(job);
        if collection.count() <= before {
            self.evicted.fetch_add(1, Ordering::Relaxed);
        }
        !collection.is_exhausted()
    }

    pub async fn run(&self) -> anyhow::Result<DispatchSummary> {
        let mut join_set = JoinSet::new();
        for worker_id in 0..self.worker_count {
            let collection = self.collection.clone();
            let handler = self.handler.clone();
            join_set.spawn(async move { Self::work(worker_id, collection, handler).await });
        }

        let mut summary = DispatchSummary {
            kind: self.kind,
            ..Default::default()
        };
        while let Some(res) = join_set.join_next().await {
            match res {
                Ok(stats) => {
                    summary.handled += stats.handled;
                    summary.failed += stats.failed;
                }
                Err(err) => bail!(Error::DispatchError(format!("worker aborted: {}", err))),
            }
        }

        {
            let collection = self.collection.lock().await;
            summary.capacity = collection.capacity().to_string();
            summary.stranded = collection.count();
        }
        summary.evicted = self.evicted.load(Ordering::Relaxed);

        log_info!(
            "dispatch finished, handled: {}, failed: {}, evicted: {}, stranded: {}",
            summary.handled,
            summary.failed,
            summary.evicted,
            summary.stranded
        );
        let summary_json = serde_json::to_string(&summary).map_err(Error::SerdeJsonError)?;
        log_finished!("{}", summary_json);
        Ok(summary)
    }

    async fn work(
        worker_id: usize,
        collection: SharedCollection<T>,
        handler: Arc<dyn JobHandler<T>>,
    ) -> WorkerStats {
        let mut stats = WorkerStats::default();
        loop {
            // release the lock before handling, other workers keep pulling
            let job = collection.lock().await.pull_next();
            let Some(job) = job else {
                break;
            };

            match handler.handle(worker_id, job).await {
                Ok(()) => stats.handled += 1,
                Err(err) => {
                    log_error!("worker: {}, job failed: {}", worker_id, err);
                    stats.failed += 1;
                }
            }
        }
        log_debug!(
            "worker: {} stopped, handled: {}, failed: {}",
            worker_id,
            stats.handled,
            stats.failed
        );
        stats
    }
}
