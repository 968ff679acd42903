#[derive(Clone, Debug)]
pub struct DispatcherConfig {
    pub worker_count: usize,
    pub job_interval_millis: u64,
    // submitted once dispatch has started
    pub late_jobs: Vec<String>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            worker_count: 1,
            job_interval_millis: 0,
            late_jobs: Vec::new(),
        }
    }
}
