pub mod dispatch_test_runner;
pub mod test_base;
