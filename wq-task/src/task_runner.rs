use std::{panic, sync::Arc};

use anyhow::{bail, Context};
use log4rs::config::{Config, Deserializers, RawConfig};
use tokio::{
    fs::{metadata, File},
    io::AsyncReadExt,
};

use std::sync::Mutex as StdMutex;

static LOG_HANDLE: StdMutex<Option<log4rs::Handle>> = StdMutex::new(None);
use wq_common::{
    config::task_config::TaskConfig, error::Error, log_error, log_info, log_warn,
};

use crate::{
    collection_util::CollectionUtil,
    dispatcher::{DispatchSummary, Dispatcher},
    job_handler::LogJobHandler,
};

#[derive(Clone)]
pub struct TaskRunner {
    config: TaskConfig,
}

const LOG_LEVEL_PLACEHOLDER: &str = "LOG_LEVEL_PLACEHOLDER";
const LOG_DIR_PLACEHOLDER: &str = "LOG_DIR_PLACEHOLDER";

impl TaskRunner {
    pub fn new(task_config_file: &str) -> anyhow::Result<Self> {
        let config = TaskConfig::new(task_config_file)
            .with_context(|| format!("invalid configs in [{}]", task_config_file))?;
        Ok(Self { config })
    }

    pub fn from_config(config: TaskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    pub async fn start_task(&self) -> anyhow::Result<DispatchSummary> {
        self.init_log4rs().await?;

        panic::set_hook(Box::new(|panic_info| {
            let backtrace = std::backtrace::Backtrace::capture();
            log_error!("panic: {}\nbacktrace:\n{}", panic_info, backtrace);
        }));

        let collection_config = &self.config.collection;
        let dispatcher_config = &self.config.dispatcher;
        log_info!(
            "start task: [kind: {}, capacity: {}, workers: {}]",
            collection_config.kind,
            collection_config.capacity,
            dispatcher_config.worker_count
        );

        let collection = CollectionUtil::create_collection(
            collection_config.kind,
            collection_config.options::<String>(),
        );
        let handler = Arc::new(LogJobHandler::new(dispatcher_config.job_interval_millis));
        let dispatcher = Dispatcher::new(
            collection_config.kind,
            collection,
            handler,
            dispatcher_config.worker_count,
        );

        let submit_late_jobs = async {
            for job in dispatcher_config.late_jobs.iter() {
                if !dispatcher.submit(job.clone()).await {
                    log_warn!(
                        "job: {} submitted after the collection was exhausted, it will not be dispatched",
                        job
                    );
                }
            }
        };
        let (summary, _) = tokio::join!(dispatcher.run(), submit_late_jobs);
        summary
    }

    async fn init_log4rs(&self) -> anyhow::Result<()> {
        let log4rs_file = &self.config.runtime.log4rs_file;
        if metadata(log4rs_file).await.is_err() {
            return Ok(());
        }

        let mut config_str = String::new();
        let mut file = File::open(log4rs_file).await.map_err(Error::IoError)?;
        file.read_to_string(&mut config_str)
            .await
            .map_err(Error::IoError)?;

        config_str = config_str
            .replace(LOG_DIR_PLACEHOLDER, &self.config.runtime.log_dir)
            .replace(LOG_LEVEL_PLACEHOLDER, &self.config.runtime.log_level);

        let raw: RawConfig = serde_yaml::from_str(&config_str).map_err(Error::SerdeYamlError)?;
        let deserializers = Deserializers::default();
        let (appenders, errors) = raw.appenders_lossy(&deserializers);
        if !errors.is_empty() {
            bail!("errors deserializing appenders: {:?}", errors);
        }

        let config = Config::builder()
            .appenders(appenders)
            .loggers(raw.loggers())
            .build(raw.root())?;
        let mut handle_guard = LOG_HANDLE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = handle_guard.as_ref() {
            // refresh log4rs config in one process
            handle.set_config(config);
        } else {
            let handle = log4rs::init_config(config)?;
            *handle_guard = Some(handle);
        }
        Ok(())
    }
}
