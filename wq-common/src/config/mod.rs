pub mod collection_config;
pub mod config_enums;
pub mod dispatcher_config;
pub mod ini_loader;
pub mod runtime_config;
pub mod task_config;
