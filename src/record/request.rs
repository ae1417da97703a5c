//! The per-request accumulator and its finalize lifecycle

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::duration::PrettyDuration;
use super::event::{Event, Severity};
use super::extras::Extras;
use crate::error::{Result, SlogError};
use crate::render;
use crate::session::Logger;

/// Completion hook run once at finalize, before rendering
pub type FinalizeHook = Box<dyn FnOnce(&mut RequestRecord) + Send>;

/// Structured facts about one in-flight request.
///
/// Plain fields are assigned directly and passed through verbatim. The record
/// is open until [`write_logs`](Self::write_logs) succeeds in running the
/// completion hook; after that it is finalized and cannot be written again.
///
/// Serializes (production mode) with `PascalCase` keys in declaration order.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestRecord {
    #[serde(skip)]
    logger: Logger,
    /// Remote address of the client
    pub client_host: String,
    /// HTTP method, e.g. `GET`
    pub http_method: String,
    /// Request path
    pub http_path: String,
    /// Response status code
    pub http_status_code: u16,
    /// Response body size in bytes
    pub response_size: u64,
    request_time: DateTime<Utc>,
    request_duration: PrettyDuration,
    /// Caller-supplied key/value telemetry
    pub extra_data: Extras,
    events: Vec<Event>,
    #[serde(skip)]
    on_finalize: Option<FinalizeHook>,
}

impl RequestRecord {
    pub(crate) fn new(logger: Logger, on_finalize: FinalizeHook) -> Self {
        let request_time = logger.now();
        Self {
            logger,
            client_host: String::new(),
            http_method: String::new(),
            http_path: String::new(),
            http_status_code: 0,
            response_size: 0,
            request_time,
            request_duration: PrettyDuration::ZERO,
            extra_data: Extras::new(),
            events: Vec::new(),
            on_finalize: Some(on_finalize),
        }
    }

    /// When the record was created
    #[must_use]
    pub const fn request_time(&self) -> DateTime<Utc> {
        self.request_time
    }

    /// Time between creation and finalize; zero while the record is open
    #[must_use]
    pub const fn request_duration(&self) -> PrettyDuration {
        self.request_duration
    }

    /// Events in the order they were appended
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Whether `write_logs` has already run the completion hook
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.on_finalize.is_none()
    }

    /// Insert or overwrite an extra value, returning the previous one
    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.extra_data.insert(key, value)
    }

    /// Append an event with the given severity
    pub fn push_event(&mut self, severity: Severity, message: impl Into<String>) {
        self.events.push(Event::new(severity, message));
    }

    /// Append an `info` event
    pub fn info(&mut self, message: impl Into<String>) {
        self.push_event(Severity::Info, message);
    }

    /// Append a `warning` event
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push_event(Severity::Warning, message);
    }

    /// Append an `error` event
    pub fn error(&mut self, message: impl Into<String>) {
        self.push_event(Severity::Error, message);
    }

    /// Append a `wtf` event
    pub fn wtf(&mut self, message: impl Into<String>) {
        self.push_event(Severity::Wtf, message);
    }

    /// Interpolate `args` into `template`; see [`crate::format::format_log`].
    ///
    /// Does not append an event.
    #[must_use]
    pub fn format_log(&self, template: &str, args: &[&dyn Display]) -> String {
        crate::format::format_log(template, args)
    }

    /// Finalize the record: fix the duration, run the completion hook, render
    /// in the logger's mode and write the result to the sink.
    ///
    /// The record counts as finalized once the hook has run, even if rendering
    /// or writing then fails. Any further call returns
    /// [`SlogError::AlreadyFinalized`] without touching the sink.
    pub fn write_logs(&mut self) -> Result<()> {
        let Some(on_finalize) = self.on_finalize.take() else {
            return Err(SlogError::AlreadyFinalized);
        };

        let elapsed = self.logger.now() - self.request_time;
        // Clocks that step backwards clamp to zero
        self.request_duration = elapsed.to_std().unwrap_or_default().into();

        on_finalize(self);

        let mode = self.logger.mode();
        let bytes = render::render(mode, self).inspect_err(|err| {
            tracing::warn!(%mode, error = %err, "failed to render request record");
        })?;
        self.logger.write(&bytes).inspect_err(|err| {
            tracing::warn!(%mode, error = %err, "failed to write request record");
        })?;

        tracing::debug!(
            %mode,
            status = self.http_status_code,
            bytes = bytes.len(),
            duration = %self.request_duration,
            "request record written"
        );
        Ok(())
    }
}

impl fmt::Debug for RequestRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestRecord")
            .field("client_host", &self.client_host)
            .field("http_method", &self.http_method)
            .field("http_path", &self.http_path)
            .field("http_status_code", &self.http_status_code)
            .field("response_size", &self.response_size)
            .field("request_time", &self.request_time)
            .field("request_duration", &self.request_duration)
            .field("extra_data", &self.extra_data)
            .field("events", &self.events)
            .field("finalized", &self.is_finalized())
            .finish_non_exhaustive()
    }
}
