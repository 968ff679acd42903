use std::path::PathBuf;

pub struct TestConfigUtil {}

const TEST_DIR: &str = "wq-tests/tests";

impl TestConfigUtil {
    pub fn get_project_root() -> PathBuf {
        project_root::get_project_root().unwrap()
    }

    pub fn get_absolute_path(relative_path: &str) -> String {
        Self::get_project_root()
            .join(TEST_DIR)
            .join(relative_path)
            .to_string_lossy()
            .to_string()
    }

    pub fn get_log4rs_file() -> String {
        Self::get_project_root()
            .join("log4rs.yaml")
            .to_string_lossy()
            .to_string()
    }

    pub fn get_log_dir() -> String {
        Self::get_project_root()
            .join("tmp")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }
}
