// Consumer constants (no magic values)
use std::time::Duration;

/// Default consumer poll interval in milliseconds (1s).
/// Cancellation is observed at least once per interval.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Default poll interval as a Duration
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(DEFAULT_POLL_INTERVAL_MS);

/// Default queue capacity when none is configured
pub const DEFAULT_CAPACITY: usize = 64;
