use super::*;

#[test]
fn when_initializing_twice_should_fail_the_second_time() {
    // The first call may lose against a subscriber installed by the test harness.
    let _ = init_tracing("debug");

    let result = init_tracing("debug");

    assert!(matches!(
        result,
        Err(Error::FailedToInitializeLogging { .. })
    ));
}
