//! Poll-interval helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the selection poll interval
//! and provide a small conversion helper so tests and code can express
//! intervals in milliseconds clearly.

use std::time::Duration;

/// Interval between selection attempts while waiting for a tag to appear in
/// the field.
pub const POLL_INTERVAL_MS: u64 = 200;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: selection poll interval as Duration.
pub fn poll_interval() -> Duration {
    ms(POLL_INTERVAL_MS)
}
