use std::error::Error;
use std::fmt;

use serde::Serialize;
use warp::reject::Reject;

use crate::constants::{
    ERROR_BODY_READ, ERROR_METHOD_NOT_ALLOWED, ERROR_NOT_FOUND, ERROR_PAYLOAD_TOO_LARGE,
    ERROR_VALIDATION_FAILED,
};

/// Error returned before a response stream is opened
#[derive(Debug, Clone)]
pub struct ServerError {
    pub message: String,
    pub status_code: u16,
    pub details: Vec<FieldError>,
    kind: ServerErrorKind,
}

#[derive(Debug, Clone)]
enum ServerErrorKind {
    UnprocessableEntity,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    PayloadTooLarge,
    InternalServerError,
}

impl ServerError {
    pub fn unprocessable_entity(details: Vec<FieldError>) -> Self {
        Self {
            message: ERROR_VALIDATION_FAILED.to_string(),
            status_code: 422,
            details,
            kind: ServerErrorKind::UnprocessableEntity,
        }
    }

    pub fn bad_request() -> Self {
        Self {
            message: ERROR_BODY_READ.to_string(),
            status_code: 400,
            details: Vec::new(),
            kind: ServerErrorKind::BadRequest,
        }
    }

    pub fn not_found() -> Self {
        Self {
            message: ERROR_NOT_FOUND.to_string(),
            status_code: 404,
            details: Vec::new(),
            kind: ServerErrorKind::NotFound,
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            message: ERROR_METHOD_NOT_ALLOWED.to_string(),
            status_code: 405,
            details: Vec::new(),
            kind: ServerErrorKind::MethodNotAllowed,
        }
    }

    pub fn payload_too_large() -> Self {
        Self {
            message: ERROR_PAYLOAD_TOO_LARGE.to_string(),
            status_code: 413,
            details: Vec::new(),
            kind: ServerErrorKind::PayloadTooLarge,
        }
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 500,
            details: Vec::new(),
            kind: ServerErrorKind::InternalServerError,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self.kind, ServerErrorKind::UnprocessableEntity)
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.kind, ServerErrorKind::InternalServerError)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServerError {}: {}", self.status_code, self.message)?;
        for detail in &self.details {
            write!(f, "; {}", detail)?;
        }
        Ok(())
    }
}

impl Error for ServerError {}

impl Reject for ServerError {}

/// Segment of the location of an invalid input, e.g. `["body", "messages"]`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocSegment {
    Field(String),
    Offset(usize),
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocSegment::Field(name) => f.write_str(name),
            LocSegment::Offset(offset) => write!(f, "{}", offset),
        }
    }
}

/// One offending input in a rejected request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub error_type: &'static str,
    pub loc: Vec<LocSegment>,
    pub msg: String,
}

impl FieldError {
    pub fn new(error_type: &'static str, loc: &[&str], msg: &str) -> Self {
        Self {
            error_type,
            loc: loc
                .iter()
                .map(|segment| LocSegment::Field(segment.to_string()))
                .collect(),
            msg: msg.to_string(),
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.loc.push(LocSegment::Offset(offset));
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self
            .loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}: {} ({})", loc, self.msg, self.error_type)
    }
}

/// Failure while composing a reply inside an already committed stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    EmptyMessages,
    MessageNotObject,
    MissingContent,
    ContentNotString,
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ReplyError::EmptyMessages => "messages list is empty",
            ReplyError::MessageNotObject => "last message is not an object",
            ReplyError::MissingContent => "last message has no 'content' field",
            ReplyError::ContentNotString => "last message 'content' is not a string",
        };
        f.write_str(description)
    }
}

impl Error for ReplyError {}
