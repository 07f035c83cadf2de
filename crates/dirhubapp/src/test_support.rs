use std::time::Duration;
use tokio::time::Instant;

/// Assert that `ms` milliseconds of (paused) clock time passed since `start`.
///
/// The timer wheel may land up to a tick late, so one extra millisecond is allowed.
pub fn assert_elapsed(start: Instant, ms: u64) {
    let elapsed = start.elapsed();
    let expected = Duration::from_millis(ms);
    assert!(
        elapsed >= expected && elapsed <= expected + Duration::from_millis(1),
        "expected ~{:?} elapsed, got {:?}",
        expected,
        elapsed
    );
}
