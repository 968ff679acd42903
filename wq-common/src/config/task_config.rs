use anyhow::bail;

use crate::{collection::capacity::Capacity, error::Error};

use super::{
    collection_config::CollectionConfig, config_enums::CollectionKind,
    dispatcher_config::DispatcherConfig, ini_loader::IniLoader, runtime_config::RuntimeConfig,
};

#[derive(Clone, Debug)]
pub struct TaskConfig {
    pub runtime: RuntimeConfig,
    pub collection: CollectionConfig,
    pub dispatcher: DispatcherConfig,
}

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_DIR: &str = "./logs";
pub const DEFAULT_LOG4RS_FILE: &str = "./log4rs.yaml";

// sections
const RUNTIME: &str = "runtime";
const COLLECTION: &str = "collection";
const DISPATCHER: &str = "dispatcher";
// keys
const LOG_LEVEL: &str = "log_level";
const LOG_DIR: &str = "log_dir";
const LOG4RS_FILE: &str = "log4rs_file";
const KIND: &str = "kind";
const CAPACITY: &str = "capacity";
const INITIAL: &str = "initial";
const WORKER_COUNT: &str = "worker_count";
const JOB_INTERVAL_MILLIS: &str = "job_interval_millis";
const LATE_JOBS: &str = "late_jobs";

impl TaskConfig {
    pub fn new(task_config_file: &str) -> anyhow::Result<Self> {
        let loader = IniLoader::new(task_config_file)?;
        Self::from_loader(&loader)
    }

    pub fn from_loader(loader: &IniLoader) -> anyhow::Result<Self> {
        Ok(Self {
            runtime: Self::load_runtime_config(loader)?,
            collection: Self::load_collection_config(loader)?,
            dispatcher: Self::load_dispatcher_config(loader)?,
        })
    }

    fn load_runtime_config(loader: &IniLoader) -> anyhow::Result<RuntimeConfig> {
        Ok(RuntimeConfig {
            log_level: loader.get_with_default(RUNTIME, LOG_LEVEL, DEFAULT_LOG_LEVEL.to_string())?,
            log_dir: loader.get_with_default(RUNTIME, LOG_DIR, DEFAULT_LOG_DIR.to_string())?,
            log4rs_file: loader.get_with_default(
                RUNTIME,
                LOG4RS_FILE,
                DEFAULT_LOG4RS_FILE.to_string(),
            )?,
        })
    }

    fn load_collection_config(loader: &IniLoader) -> anyhow::Result<CollectionConfig> {
        let kind: CollectionKind = loader.get_required(COLLECTION, KIND)?;
        // capacity and initial are coerced rather than rejected
        let capacity = match loader.get_raw(COLLECTION, CAPACITY) {
            Some(raw) => Capacity::from_str_lossy(&raw),
            None => Capacity::Unbounded,
        };
        let initial = CollectionConfig::parse_initial(loader.get_raw(COLLECTION, INITIAL));
        Ok(CollectionConfig {
            kind,
            capacity,
            initial,
        })
    }

    fn load_dispatcher_config(loader: &IniLoader) -> anyhow::Result<DispatcherConfig> {
        let default = DispatcherConfig::default();
        let worker_count = loader.get_with_default(DISPATCHER, WORKER_COUNT, default.worker_count)?;
        if worker_count == 0 {
            bail!(Error::ConfigError(format!(
                "config [{}].{} must be positive",
                DISPATCHER, WORKER_COUNT
            )))
        }

        let late_jobs = match loader.get_raw(DISPATCHER, LATE_JOBS) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(jobs) => jobs,
                Err(err) => bail!(Error::ConfigError(format!(
                    "config [{}].{} should be a json array of strings, got [{}]: {}",
                    DISPATCHER, LATE_JOBS, raw, err
                ))),
            },
            None => default.late_jobs,
        };

        Ok(DispatcherConfig {
            worker_count,
            job_interval_millis: loader.get_with_default(
                DISPATCHER,
                JOB_INTERVAL_MILLIS,
                default.job_interval_millis,
            )?,
            late_jobs,
        })
    }
}
