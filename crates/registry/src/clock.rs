//! Processing-time source for the registry.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Supplies the processing timestamp recorded on forests and verifications.
///
/// The registry treats the value as an opaque monotonic-enough integer; it is
/// never compared against caller-supplied acquisition times.
pub trait Clock: Send + Sync {
    /// Current time in seconds since the UNIX epoch.
    fn now(&self) -> u64;
}

/// Wall-clock time source used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now() > 1_577_836_800);
    }
}
