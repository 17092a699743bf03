use bytes::Bytes;
use serde_json::Value;

use crate::constants::{SSE_DATA_PREFIX, SSE_DONE_MESSAGE, SSE_MESSAGE_BOUNDARY};

/// One server-sent event of a reply stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    Content(String),
    Done,
}

impl SseEvent {
    pub fn payload(&self) -> String {
        match self {
            SseEvent::Content(text) => content_payload(text),
            SseEvent::Done => SSE_DONE_MESSAGE.to_string(),
        }
    }

    pub fn encode(&self) -> Bytes {
        let payload = self.payload();
        let mut frame = String::with_capacity(
            SSE_DATA_PREFIX.len() + payload.len() + SSE_MESSAGE_BOUNDARY.len(),
        );
        frame.push_str(SSE_DATA_PREFIX);
        frame.push_str(&payload);
        frame.push_str(SSE_MESSAGE_BOUNDARY);
        Bytes::from(frame)
    }
}

/// Renders `{"content": <text>}` with a space after the colon. Non-ASCII
/// text is written as UTF-8 rather than `\uXXXX` escapes; both decode to
/// the same string.
pub fn content_payload(text: &str) -> String {
    let encoded = Value::String(text.to_string());
    format!("{{\"content\": {}}}", encoded)
}
