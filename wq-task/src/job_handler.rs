use std::{fmt::Display, time::Duration};

use async_trait::async_trait;

use wq_common::log_info;

#[async_trait]
pub trait JobHandler<T>: Send + Sync {
    async fn handle(&self, worker_id: usize, job: T) -> anyhow::Result<()>;
}

/// Logs every job, optionally pausing to stand in for real work.
pub struct LogJobHandler {
    pub job_interval: Duration,
}

impl LogJobHandler {
    pub fn new(job_interval_millis: u64) -> Self {
        Self {
            job_interval: Duration::from_millis(job_interval_millis),
        }
    }
}

#[async_trait]
impl<T> JobHandler<T> for LogJobHandler
where
    T: Display + Send + 'static,
{
    async fn handle(&self, worker_id: usize, job: T) -> anyhow::Result<()> {
        if !self.job_interval.is_zero() {
            tokio::time::sleep(self.job_interval).await;
        }
        log_info!("worker: {}, job done: {}", worker_id, job);
        Ok(())
    }
}
