//! Logger configuration parser
//!
//! Parses a small TOML file into a [`LoggerConfig`]:
//!
//! ```toml
//! mode = "production"   # or "development" (default)
//! output = "stderr"     # or "stdout" (default)
//! color = false         # force ANSI colors on/off; unset follows the terminal
//! ```

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::{Logger, Mode};

/// Standard stream the logger writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    /// Process standard output
    #[default]
    Stdout,
    /// Process standard error
    Stderr,
}

impl Output {
    /// Handle on the selected stream. Anything that must appear alongside the
    /// rendered records should be written through this.
    #[must_use]
    pub fn writer(self) -> Box<dyn Write + Send> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
        }
    }
}

/// Top-level logger configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Rendering mode
    #[serde(default)]
    pub mode: Mode,
    /// Where rendered records go
    #[serde(default)]
    pub output: Output,
    /// Force colors on or off. None leaves the decision to `colored`
    /// (terminal detection, `NO_COLOR`, `CLICOLOR_FORCE`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl LoggerConfig {
    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse logger config")
    }

    /// Apply the process-wide color override, if one is configured
    pub fn apply_color_override(&self) {
        if let Some(enabled) = self.color {
            colored::control::set_override(enabled);
        }
    }

    /// Build a logger writing to the configured standard stream
    #[must_use]
    pub fn build_logger(&self) -> Logger {
        Logger::new(self.output.writer(), self.mode)
    }
}
