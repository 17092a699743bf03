use serde_json::Value;

use crate::constants::{DEFAULT_MODEL, DEFAULT_STREAM};
use crate::error::ReplyError;

/// Validated body of `POST /v2/chat/completions`
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Value>,
    pub model: String,
    /// Accepted for compatibility; replies always stream.
    pub stream: bool,
}

impl ChatRequest {
    pub fn new(messages: Vec<Value>) -> Self {
        Self {
            messages,
            model: DEFAULT_MODEL.to_string(),
            stream: DEFAULT_STREAM,
        }
    }

    pub fn last_message(&self) -> Result<ChatMessage<'_>, ReplyError> {
        let last = self.messages.last().ok_or(ReplyError::EmptyMessages)?;
        ChatMessage::from_value(last)
    }
}

/// Typed view over a raw message element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage<'a> {
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self, ReplyError> {
        let object = value.as_object().ok_or(ReplyError::MessageNotObject)?;
        let content = object.get("content").ok_or(ReplyError::MissingContent)?;
        let content = content.as_str().ok_or(ReplyError::ContentNotString)?;
        Ok(Self { content })
    }
}
