//! Fixed color tables for development output
//!
//! Tables are constants; the ANSI escape codes themselves are applied by
//! `colored`, which honours `NO_COLOR`, `CLICOLOR` and terminal detection.

use colored::{Color, Colorize};

use crate::record::Severity;

/// A label with the background it is drawn on (always black text)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Text shown on the console
    pub label: &'static str,
    /// Background color
    pub background: Color,
}

impl Swatch {
    const fn new(label: &'static str, background: Color) -> Self {
        Self { label, background }
    }

    fn paint(&self) -> String {
        paint(self.label, self.background)
    }
}

fn paint(text: &str, background: Color) -> String {
    text.on_color(background).black().to_string()
}

static METHOD_PALETTE: [(&str, Swatch); 6] = [
    ("GET", Swatch::new("(GET)", Color::Green)),
    ("HEAD", Swatch::new("(HEAD)", Color::BrightGreen)),
    ("POST", Swatch::new("(POST)", Color::Magenta)),
    ("PUT", Swatch::new("(PUT)", Color::Yellow)),
    ("DELETE", Swatch::new("(DELETE)", Color::Red)),
    ("OPTIONS", Swatch::new("(OPTIONS)", Color::Cyan)),
];

/// Background for methods without a dedicated swatch
const DEFAULT_METHOD_BACKGROUND: Color = Color::White;

/// Look up the swatch for an HTTP method, ignoring case
#[must_use]
pub fn method_swatch(method: &str) -> Option<&'static Swatch> {
    METHOD_PALETTE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(method))
        .map(|(_, swatch)| swatch)
}

/// Colorized method tag; unknown methods are upper-cased on a neutral background
#[must_use]
pub fn colorize_method(method: &str) -> String {
    method_swatch(method).map_or_else(
        || paint(&method.to_uppercase(), DEFAULT_METHOD_BACKGROUND),
        Swatch::paint,
    )
}

/// Hundred-bucket of an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
}

impl StatusClass {
    /// Classify a status code; `None` outside 100..=599
    #[must_use]
    pub const fn of(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(Self::Informational),
            200..=299 => Some(Self::Success),
            300..=399 => Some(Self::Redirection),
            400..=499 => Some(Self::ClientError),
            500..=599 => Some(Self::ServerError),
            _ => None,
        }
    }

    const fn background(self) -> Color {
        match self {
            Self::Informational => Color::Blue,
            Self::Success => Color::Green,
            Self::Redirection => Color::Magenta,
            Self::ClientError => Color::Yellow,
            Self::ServerError => Color::Red,
        }
    }
}

/// `[code]`, colored by bucket; plain brackets outside 100..=599
#[must_use]
pub fn colorize_status(code: u16) -> String {
    let text = format!("[{code}]");
    match StatusClass::of(code) {
        Some(class) => paint(&text, class.background()),
        None => text,
    }
}

/// The swatch used for an event severity
#[must_use]
pub const fn severity_swatch(severity: Severity) -> Swatch {
    match severity {
        Severity::Info => Swatch::new("<INFO>", Color::Cyan),
        Severity::Warning => Swatch::new("<WARNING>", Color::Yellow),
        Severity::Error => Swatch::new("<ERROR>", Color::Red),
        Severity::Wtf => Swatch::new("<WTF>", Color::Magenta),
    }
}

/// Colorized severity tag
#[must_use]
pub fn colorize_severity(severity: Severity) -> String {
    severity_swatch(severity).paint()
}
