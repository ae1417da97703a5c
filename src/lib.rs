//! Slogger - per-request structured logging
//!
//! Accumulates facts about one in-flight request (method, path, status, size,
//! timing, extras and severity-tagged events) and renders them once, either as
//! a colorized console line (development) or as a JSON document (production).

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod render;
pub mod session;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use config::{LoggerConfig, Output};
pub use error::SlogError;
pub use format::format_log;
pub use record::{Event, Extras, PrettyDuration, RequestRecord, Severity};
pub use session::{Logger, MemorySink, Mode};
