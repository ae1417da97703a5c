//! Human-readable request durations
//!
//! Durations serialize as strings like `"1.2s"`, `"350ms"` or `"1m30s"` instead
//! of a raw count, both on the console and in JSON output.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Elapsed time that renders as a compact human string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrettyDuration(Duration);

impl PrettyDuration {
    /// Zero duration, rendered as `"0s"`
    pub const ZERO: Self = Self(Duration::ZERO);

    /// The wrapped duration
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }
}

impl From<Duration> for PrettyDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for PrettyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.as_nanos();

        if nanos == 0 {
            return f.write_str("0s");
        }
        if nanos < NANOS_PER_MICRO {
            return write!(f, "{nanos}ns");
        }
        if nanos < NANOS_PER_MILLI {
            write_fraction(f, nanos, NANOS_PER_MICRO, 3)?;
            return f.write_str("µs");
        }
        if nanos < NANOS_PER_SEC {
            write_fraction(f, nanos, NANOS_PER_MILLI, 6)?;
            return f.write_str("ms");
        }

        let secs = self.0.as_secs();
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        if hours > 0 {
            write!(f, "{hours}h")?;
        }
        if hours > 0 || minutes > 0 {
            write!(f, "{minutes}m")?;
        }
        let rest = u128::from(secs % 60) * NANOS_PER_SEC + u128::from(self.0.subsec_nanos());
        write_fraction(f, rest, NANOS_PER_SEC, 9)?;
        f.write_str("s")
    }
}

/// Write `value / unit` with up to `digits` fractional digits, trailing zeros trimmed.
fn write_fraction(
    f: &mut fmt::Formatter<'_>,
    value: u128,
    unit: u128,
    digits: usize,
) -> fmt::Result {
    let whole = value / unit;
    let frac = value % unit;
    write!(f, "{whole}")?;
    if frac > 0 {
        let padded = format!("{frac:0digits$}");
        write!(f, ".{}", padded.trim_end_matches('0'))?;
    }
    Ok(())
}

impl Serialize for PrettyDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
