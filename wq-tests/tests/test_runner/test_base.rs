use wq_task::dispatcher::DispatchSummary;

use super::dispatch_test_runner::DispatchTestRunner;

pub struct TestBase {}

#[allow(dead_code)]
impl TestBase {
    pub async fn run_dispatch_test(test_dir: &str, expected_jobs: &[&str]) -> DispatchSummary {
        let runner = DispatchTestRunner::new(test_dir).unwrap();
        let (summary, jobs) = runner.run_recording().await.unwrap();
        assert_eq!(jobs, expected_jobs);
        assert_eq!(summary.handled, expected_jobs.len());
        summary
    }

    // handling order is up to the scheduler when several workers pull
    pub async fn run_unordered_dispatch_test(test_dir: &str, expected_count: usize) {
        let runner = DispatchTestRunner::new(test_dir).unwrap();
        let (summary, mut jobs) = runner.run_recording().await.unwrap();
        assert_eq!(summary.handled, expected_count);

        let mut expected = runner.config.collection.options::<String>().initial;
        jobs.sort();
        expected.sort();
        assert_eq!(jobs, expected);
    }

    pub async fn run_task_test(test_dir: &str) -> DispatchSummary {
        let runner = DispatchTestRunner::new(test_dir).unwrap();
        let collection_config = &runner.config.collection;
        // construction truncates the initial jobs to the capacity
        let mut initial = collection_config.options::<String>().initial;
        collection_config.capacity.truncate(&mut initial);
        let submitted = initial.len() + runner.config.dispatcher.late_jobs.len();

        let summary = runner.run_task().await.unwrap();
        // every job is either handled, evicted or left behind
        assert_eq!(
            summary.handled + summary.failed + summary.evicted + summary.stranded,
            submitted
        );
        summary
    }
}
