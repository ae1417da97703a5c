//! JSON rendering: one compact document per request, newline-terminated

use crate::error::Result;
use crate::record::RequestRecord;

/// Encode a finalized record as a single JSON line
pub fn render(record: &RequestRecord) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec(record)?;
    buf.push(b'\n');
    Ok(buf)
}
