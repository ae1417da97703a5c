//! Mode-specific rendering of finalized request records

pub mod development;
pub mod palette;
pub mod production;

use crate::error::Result;
use crate::record::RequestRecord;
use crate::session::Mode;

/// Render a record into the bytes written to the sink for `mode`
pub fn render(mode: Mode, record: &RequestRecord) -> Result<Vec<u8>> {
    match mode {
        Mode::Development => Ok(development::render(record).into_bytes()),
        Mode::Production => production::render(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{manual_logger, sample_request, strip_ansi};

    #[test]
    fn test_dispatch_by_mode() {
        let logger = manual_logger(Mode::Development);
        let record = sample_request(&logger);

        let dev = String::from_utf8(render(Mode::Development, &record).unwrap()).unwrap();
        let prod = String::from_utf8(render(Mode::Production, &record).unwrap()).unwrap();

        assert!(strip_ansi(&dev).starts_with("(POST) | "));
        assert!(prod.starts_with('{'));
        assert!(serde_json::from_str::<serde_json::Value>(&prod).is_ok());
    }
}
