
use crate::constants::{SSE_DATA_PREFIX, SSE_MESSAGE_BOUNDARY};

/// Splits an SSE body into the payloads of its `data: ` events.
pub fn sse_payloads(body: &[u8]) -> Vec<String> {
    let mut buffer = String::from_utf8_lossy(body).into_owned();
    let mut payloads = Vec::new();

    while let Some(boundary_pos) = buffer.find(SSE_MESSAGE_BOUNDARY) {
        let message_text = buffer[..boundary_pos].to_string();
        buffer.drain(..boundary_pos + SSE_MESSAGE_BOUNDARY.len());
        if let Some(data) = message_text.strip_prefix(SSE_DATA_PREFIX) {
            payloads.push(data.to_string());
        }
    }
    if let Some(data) = buffer.trim_end().strip_prefix(SSE_DATA_PREFIX) {
        payloads.push(data.to_string());
    }
    payloads
}
