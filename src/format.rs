//! Message template interpolation for event text.
//!
//! Supports `{}` (next positional argument) and `{N}` (argument by index).
//! `{{` and `}}` produce literal braces. Placeholders without a matching
//! argument are left as-is; surplus arguments are ignored.

use std::fmt::Display;

/// Interpolate `args` into `template`.
///
/// Pure: nothing is recorded. Pass the result to one of the event-append
/// operations on a request record to log it.
#[must_use]
pub fn format_log(template: &str, args: &[&dyn Display]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut next_positional = 0;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            result.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix("}}") {
            result.push('}');
            rest = after;
            continue;
        }

        if let Some(inner) = tail.strip_prefix('{') {
            if let Some(close) = inner.find('}') {
                let name = &inner[..close];
                if name.bytes().all(|b| b.is_ascii_digit()) {
                    let index = if name.is_empty() {
                        next_positional += 1;
                        Some(next_positional - 1)
                    } else {
                        name.parse::<usize>().ok()
                    };
                    match index.and_then(|i| args.get(i)) {
                        Some(arg) => result.push_str(&arg.to_string()),
                        // Unknown placeholder, kept as written
                        None => result.push_str(&tail[..close + 2]),
                    }
                    rest = &inner[close + 1..];
                    continue;
                }
            }
        }

        // Lone brace with no placeholder
        result.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_placeholders_returns_unchanged() {
        assert_eq!(format_log("Hello world", &[]), "Hello world");
    }

    #[test]
    fn test_positional_placeholders_in_order() {
        let result = format_log("user {} fetched {} rows", &[&"alice", &42]);
        assert_eq!(result, "user alice fetched 42 rows");
    }

    #[test]
    fn test_indexed_placeholders() {
        let result = format_log("{1} before {0}, {1} again", &[&"a", &"b"]);
        assert_eq!(result, "b before a, b again");
    }

    #[test]
    fn test_missing_argument_left_as_is() {
        assert_eq!(format_log("{} and {}", &[&1]), "1 and {}");
        assert_eq!(format_log("{3}", &[&1]), "{3}");
    }

    #[test]
    fn test_surplus_arguments_ignored() {
        assert_eq!(format_log("only {}", &[&1, &2, &3]), "only 1");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(format_log("{{literal}} {}", &[&"x"]), "{literal} x");
    }

    #[test]
    fn test_non_numeric_name_not_expanded() {
        assert_eq!(format_log("{name} {}", &[&"v"]), "{name} v");
    }

    #[test]
    fn test_unclosed_brace_kept() {
        assert_eq!(format_log("{incomplete", &[&1]), "{incomplete");
        assert_eq!(format_log("a } b", &[]), "a } b");
    }

    #[test]
    fn test_multibyte_text_preserved() {
        assert_eq!(format_log("größe {} µs", &[&12]), "größe 12 µs");
    }
}
