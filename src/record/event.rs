//! Severity-tagged events appended while a request is handled

use std::fmt;

use serde::{Deserialize, Serialize};

/// Importance of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Info,
    /// Something unexpected that the request recovered from
    Warning,
    /// The request failed
    Error,
    /// Something that should never happen
    Wtf,
}

impl Severity {
    /// All severities in declaration order
    pub const ALL: [Self; 4] = [Self::Info, Self::Warning, Self::Error, Self::Wtf];

    /// The wire tag used in JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Wtf => "wtf",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message recorded against a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    /// How important the message is
    pub severity: Severity,
    /// The message text, passed through verbatim
    pub message: String,
}

impl Event {
    /// Create an event
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}
