#[cfg(test)]
mod test {
    use serial_test::serial;

    use crate::test_runner::{dispatch_test_runner::DispatchTestRunner, test_base::TestBase};

    #[tokio::test]
    #[serial]
    async fn dispatch_last_basic_test() {
        // capacity 3 keeps the first three of five initial jobs
        let summary =
            TestBase::run_dispatch_test("dispatch/last_basic_test", &["a", "b", "c"]).await;
        assert_eq!(summary.capacity, "3");
        assert_eq!(summary.stranded, 0);
    }

    #[tokio::test]
    #[serial]
    async fn dispatch_first_basic_test() {
        let summary =
            TestBase::run_dispatch_test("dispatch/first_basic_test", &["c", "b", "a"]).await;
        assert_eq!(summary.capacity, "3");
    }

    #[tokio::test]
    #[serial]
    async fn dispatch_malformed_test() {
        let summary = TestBase::run_dispatch_test("dispatch/malformed_test", &[]).await;
        assert_eq!(summary.capacity, "unbounded");
        assert_eq!(summary.stranded, 0);
    }

    #[tokio::test]
    #[serial]
    async fn dispatch_multi_worker_test() {
        TestBase::run_unordered_dispatch_test("dispatch/multi_worker_test", 20).await;
    }

    #[tokio::test]
    #[serial]
    async fn dispatch_late_jobs_test() {
        // the worker holds its first job far longer than the late submits take,
        // so every late job lands while the cursor is still active
        let summary = TestBase::run_task_test("dispatch/late_jobs_test").await;
        assert_eq!(summary.handled, 6);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.evicted, 0);
        assert_eq!(summary.stranded, 0);
    }

    #[tokio::test]
    #[serial]
    async fn dispatch_task_twice_test() {
        // the second run reconfigures the log4rs handle of the first one
        TestBase::run_task_test("dispatch/multi_worker_test").await;
        let summary = TestBase::run_task_test("dispatch/first_basic_test").await;
        assert_eq!(summary.handled, 3);
    }

    #[test]
    fn dispatch_config_error_test() {
        assert!(DispatchTestRunner::new("dispatch/no_such_test").is_err());
    }
}
