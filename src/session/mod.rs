//! Logger session: output sink, rendering mode and record factory
//!
//! A [`Logger`] is immutable once built. It can be cloned cheaply and shared
//! across threads; every record it creates is independent and only touches
//! the shared sink when it is finalized.

pub mod sink;

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, SlogError};
use crate::record::RequestRecord;

pub use sink::MemorySink;

/// How finalized records are rendered.
///
/// Deserializes through [`FromStr`], so config files accept the same
/// case-insensitive names and `dev`/`prod` aliases as the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mode {
    /// Colorized single line per request, one indented line per event
    #[default]
    Development,
    /// One JSON document per request
    Production,
}

impl Mode {
    /// Lowercase name of the mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "prod" | "production" => Ok(Self::Production),
            _ => Err(SlogError::UnknownMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = SlogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

type Sink = Box<dyn Write + Send>;

struct Shared {
    sink: Mutex<Sink>,
    mode: Mode,
    clock: Box<dyn Clock>,
}

/// Per-process logging configuration and factory for request records
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
}

impl Logger {
    /// Create a logger writing to `sink` in the given mode, timed by the system clock
    pub fn new<W>(sink: W, mode: Mode) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_clock(sink, mode, SystemClock)
    }

    /// Create a logger with an explicit time source
    pub fn with_clock<W, C>(sink: W, mode: Mode, clock: C) -> Self
    where
        W: Write + Send + 'static,
        C: Clock + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                sink: Mutex::new(Box::new(sink)),
                mode,
                clock: Box::new(clock),
            }),
        }
    }

    /// The rendering mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.shared.mode
    }

    /// Start a new request record.
    ///
    /// `request_time` is stamped now; extras and events start empty.
    /// `on_finalize` runs exactly once, inside [`RequestRecord::write_logs`],
    /// after the duration is fixed and before the record is rendered.
    pub fn new_request<F>(&self, on_finalize: F) -> RequestRecord
    where
        F: FnOnce(&mut RequestRecord) + Send + 'static,
    {
        RequestRecord::new(self.clone(), Box::new(on_finalize))
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.shared.clock.now()
    }

    /// Write one fully rendered record to the sink under the sink lock.
    pub(crate) fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut sink = self
            .shared
            .sink
            .lock()
            .map_err(|_| SlogError::SinkPoisoned)?;
        sink.write_all(bytes)?;
        sink.flush()?;
        drop(sink);
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("mode", &self.shared.mode)
            .finish_non_exhaustive()
    }
}
