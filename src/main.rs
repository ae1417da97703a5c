//! Slogger - per-request structured logging
//!
//! Demo entry point: logs one example request in each rendering mode.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use slogger::{Logger, LoggerConfig, Mode, RequestRecord};

/// Which rendering modes the demo should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DemoMode {
    /// Colorized console output only
    Development,
    /// JSON output only
    Production,
    /// Development first, then production
    Both,
}

/// Render an example request as a console line and as JSON
#[derive(Parser, Debug)]
#[command(name = "slogger", version, about)]
struct Cli {
    /// Rendering mode(s) to demonstrate
    #[arg(long, value_enum, default_value_t = DemoMode::Both)]
    mode: DemoMode,

    /// Optional TOML config (output stream, color override)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Diagnostics go to stderr so rendered records on stdout stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the example request: events are appended while "handling" it, the
/// response facts are attached by the completion hook.
fn example_request(logger: &Logger) -> RequestRecord {
    let mut record = logger.new_request(|r| {
        r.client_host = "127.0.0.1".to_string();
        r.http_method = "POST".to_string();
        r.http_path = "/api/v1/testing".to_string();
        r.http_status_code = 200;
        r.response_size = 35_189;
        r.set_extra("Funny_Number_lol", 69);
        r.set_extra("Favorite_Colour", "Purple");
        r.set_extra("Slice", vec![1, 2, 3]);
    });
    record.info("info example");
    record.warning("warning example");
    record.error("error example");
    record.wtf("WTF example");
    record
}

/// Title line shown above each mode's output, blank-line separated after the first
fn write_header(out: &mut dyn Write, index: usize, mode: Mode) -> io::Result<()> {
    if index > 0 {
        writeln!(out)?;
    }
    let title = match mode {
        Mode::Development => "Development",
        Mode::Production => "Production",
    };
    writeln!(out, "{title} output:")?;
    out.flush()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => LoggerConfig::from_path(path)?,
        None => LoggerConfig::default(),
    };
    config.apply_color_override();

    let modes: &[Mode] = match cli.mode {
        DemoMode::Development => &[Mode::Development],
        DemoMode::Production => &[Mode::Production],
        DemoMode::Both => &[Mode::Development, Mode::Production],
    };

    for (i, mode) in modes.iter().enumerate() {
        // Headers share the stream the records go to
        write_header(&mut config.output.writer(), i, *mode)?;

        let logger = LoggerConfig {
            mode: *mode,
            ..config.clone()
        }
        .build_logger();
        example_request(&logger)
            .write_logs()
            .with_context(|| format!("Failed to write {mode} example record"))?;
    }

    Ok(())
}
