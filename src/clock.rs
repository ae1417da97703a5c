//! Time source for request timestamps and durations

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// The logger stamps `request_time` from its clock when a record is created and
/// reads it again at finalize to compute the request duration.
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_reports_current_era() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now().timestamp() > 1_577_836_800);
    }
}
