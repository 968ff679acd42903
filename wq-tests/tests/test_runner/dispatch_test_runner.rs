use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wq_common::config::task_config::TaskConfig;
use wq_task::{
    collection_util::CollectionUtil,
    dispatcher::{DispatchSummary, Dispatcher},
    job_handler::JobHandler,
    task_runner::TaskRunner,
};
use wq_tests::test_config_util::TestConfigUtil;

#[derive(Default)]
pub struct RecordingJobHandler {
    pub jobs: Mutex<Vec<String>>,
}

#[async_trait]
impl JobHandler<String> for RecordingJobHandler {
    async fn handle(&self, _worker_id: usize, job: String) -> anyhow::Result<()> {
        self.jobs.lock().unwrap().push(job);
        tokio::task::yield_now().await;
        Ok(())
    }
}

#[allow(dead_code)]
pub struct DispatchTestRunner {
    pub task_config_file: String,
    pub config: TaskConfig,
}

#[allow(dead_code)]
impl DispatchTestRunner {
    pub fn new(relative_test_dir: &str) -> anyhow::Result<Self> {
        let task_config_file = format!(
            "{}/task_config.ini",
            TestConfigUtil::get_absolute_path(relative_test_dir)
        );
        let mut config = TaskConfig::new(&task_config_file)?;
        // logs of all cases go to the same place, whatever the case config says
        config.runtime.log4rs_file = TestConfigUtil::get_log4rs_file();
        config.runtime.log_dir = TestConfigUtil::get_log_dir();
        Ok(Self {
            task_config_file,
            config,
        })
    }

    /// Dispatches the configured collection, recording jobs in handling order.
    pub async fn run_recording(&self) -> anyhow::Result<(DispatchSummary, Vec<String>)> {
        let collection_config = &self.config.collection;
        let collection = CollectionUtil::create_collection(
            collection_config.kind,
            collection_config.options::<String>(),
        );
        let handler = Arc::new(RecordingJobHandler::default());
        let dispatcher = Dispatcher::new(
            collection_config.kind,
            collection,
            handler.clone(),
            self.config.dispatcher.worker_count,
        );

        let summary = dispatcher.run().await?;
        let jobs = handler.jobs.lock().unwrap().clone();
        Ok((summary, jobs))
    }

    pub async fn run_task(&self) -> anyhow::Result<DispatchSummary> {
        TaskRunner::from_config(self.config.clone())
            .start_task()
            .await
    }
}
