use exhibition_lookup::setup_logging;

#[test]
fn test_setup_logging_is_idempotent() {
    // Cold start and tests may both initialize; the second call must be a no-op
    setup_logging();
    setup_logging();
}
