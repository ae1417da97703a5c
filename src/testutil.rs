//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::clock::Clock;
use crate::record::RequestRecord;
use crate::session::{Logger, MemorySink, Mode};

/// Clock that only moves when told to. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl Default for ManualClock {
    /// Starts at 2026-01-15 10:00:00 UTC
    fn default() -> Self {
        Self {
            now: Arc::new(Mutex::new(
                Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            )),
        }
    }
}

impl ManualClock {
    /// Move the clock by `by` (may be negative)
    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Remove ANSI SGR escape sequences (`ESC [ ... m`) from `text`
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Logger over a throwaway memory sink, pinned to the default manual clock
#[must_use]
pub fn manual_logger(mode: Mode) -> Logger {
    Logger::with_clock(MemorySink::new(), mode, ManualClock::default())
}

/// A record populated like the demo request, with one info event.
#[must_use]
pub fn sample_request(logger: &Logger) -> RequestRecord {
    let mut record = logger.new_request(|_| {});
    record.client_host = "127.0.0.1".to_string();
    record.http_method = "POST".to_string();
    record.http_path = "/api/v1/testing".to_string();
    record.http_status_code = 200;
    record.response_size = 35_189;
    record.set_extra("Favorite_Colour", "Purple");
    record.info("info example");
    record
}
