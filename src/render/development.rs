//! Human-readable console rendering
//!
//! One pipe-separated summary line per request, followed by one indented
//! line per event in append order:
//!
//! ```text
//! (POST) | "/api/v1/testing" | 127.0.0.1 | [200] | 34.4 KiB | 15 Jan 2026 10:00:00 AM | 1.2s | colour:Purple
//!  |-> <INFO>: info example
//! ```

use std::fmt::Write as _;

use serde_json::Value;

use super::palette::{colorize_method, colorize_severity, colorize_status};
use crate::record::{Extras, RequestRecord};

/// Timestamp layout, e.g. `2 Jan 2006 3:04:05 PM`
const TIMESTAMP_FORMAT: &str = "%-d %b %Y %-I:%M:%S %p";

const SIZE_UNITS: &[u8] = b"KMGTPE";

/// Render a finalized record for terminal viewing
#[must_use]
pub fn render(record: &RequestRecord) -> String {
    let mut out = format!(
        "{} | \"{}\" | {} | {} | {} | {} | {}",
        colorize_method(&record.http_method),
        record.http_path,
        record.client_host,
        colorize_status(record.http_status_code),
        format_file_size(record.response_size),
        record.request_time().format(TIMESTAMP_FORMAT),
        record.request_duration(),
    );
    out.push_str(" | ");
    out.push_str(&format_extras(&record.extra_data));
    out.push('\n');

    for event in record.events() {
        let _ = writeln!(
            out,
            " |-> {}: {}",
            colorize_severity(event.severity),
            event.message
        );
    }

    out
}

/// Format a byte count with binary units: `"512 B"`, `"1.5 KiB"`, `"1.0 MiB"`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!(
        "{:.1} {}iB",
        bytes as f64 / div as f64,
        char::from(SIZE_UNITS[exp])
    )
}

/// `key:value` pairs separated by spaces, without an enclosing wrapper
#[must_use]
pub fn format_extras(extras: &Extras) -> String {
    extras
        .iter()
        .map(|(key, value)| format!("{key}:{}", format_value(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", inner.join(" "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{k}:{}", format_value(v)))
                .collect();
            format!("{{{}}}", inner.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Logger, MemorySink, Mode};
    use crate::testutil::{manual_logger, strip_ansi, ManualClock};
    use serde_json::json;

    #[test]
    fn test_file_size_bytes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1), "1 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_file_size_binary_units() {
        assert_eq!(format_file_size(1024), "1.0 KiB");
        assert_eq!(format_file_size(1536), "1.5 KiB");
        assert_eq!(format_file_size(35_189), "34.4 KiB");
        assert_eq!(format_file_size(1_048_576), "1.0 MiB");
        assert_eq!(format_file_size(1 << 30), "1.0 GiB");
        assert_eq!(format_file_size(1 << 40), "1.0 TiB");
        assert_eq!(format_file_size(1 << 50), "1.0 PiB");
        assert_eq!(format_file_size(1 << 60), "1.0 EiB");
    }

    #[test]
    fn test_file_size_max_does_not_overflow() {
        assert_eq!(format_file_size(u64::MAX), "16.0 EiB");
    }

    #[test]
    fn test_extras_strip_wrapper_and_sort_keys() {
        let extras: Extras = [
            ("Slice", json!([1, 2, 3])),
            ("Funny_Number_lol", json!(69)),
            ("Favorite_Colour", json!("Purple")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            format_extras(&extras),
            "Favorite_Colour:Purple Funny_Number_lol:69 Slice:[1 2 3]"
        );
    }

    #[test]
    fn test_extras_nested_values() {
        let extras: Extras = [("ctx", json!({"ok": true, "none": null}))]
            .into_iter()
            .collect();
        assert_eq!(format_extras(&extras), "ctx:{none:null ok:true}");
    }

    #[test]
    fn test_render_full_line_and_events() {
        let clock = ManualClock::default();
        let logger = Logger::with_clock(MemorySink::new(), Mode::Development, clock.clone());
        let mut record = logger.new_request(|_| {});
        record.client_host = "127.0.0.1".to_string();
        record.http_method = "post".to_string();
        record.http_path = "/api/v1/testing".to_string();
        record.http_status_code = 200;
        record.response_size = 35_189;
        record.set_extra("Favorite_Colour", "Purple");
        record.info("info example");
        record.wtf("WTF example");
        clock.advance(chrono::Duration::milliseconds(1_200));
        record.write_logs().unwrap();

        let rendered = strip_ansi(&render(&record));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "(POST) | \"/api/v1/testing\" | 127.0.0.1 | [200] | 34.4 KiB | 15 Jan 2026 10:00:00 AM | 1.2s | Favorite_Colour:Purple",
                " |-> <INFO>: info example",
                " |-> <WTF>: WTF example",
            ]
        );
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_without_extras_keeps_empty_segment() {
        let logger = manual_logger(Mode::Development);
        let record = logger.new_request(|_| {});

        let rendered = strip_ansi(&render(&record));

        assert_eq!(
            rendered,
            " | \"\" |  | [0] | 0 B | 15 Jan 2026 10:00:00 AM | 0s | \n"
        );
    }
}
