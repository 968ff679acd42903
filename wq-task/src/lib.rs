pub mod collection_util;
pub mod dispatcher;
pub mod job_handler;
pub mod task_runner;
