use serde_json::{Map, Value};

use crate::error::{FieldError, ServerError};
use crate::model::types::ChatRequest;

const TRUE_STRINGS: [&str; 6] = ["1", "on", "t", "true", "y", "yes"];
const FALSE_STRINGS: [&str; 6] = ["0", "off", "f", "false", "n", "no"];

/// Parses and validates a raw request body, collecting every offending field.
pub fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ServerError::unprocessable_entity(vec![FieldError::new(
            "missing",
            &["body"],
            "Field required",
        )]));
    }

    let value: Value = serde_json::from_slice(body).map_err(|err| {
        let offset = error_offset(body, err.line(), err.column());
        ServerError::unprocessable_entity(vec![
            FieldError::new("json_invalid", &["body"], "JSON decode error").with_offset(offset),
        ])
    })?;

    validate_chat_request(value).map_err(ServerError::unprocessable_entity)
}

pub fn validate_chat_request(value: Value) -> Result<ChatRequest, Vec<FieldError>> {
    let Value::Object(mut fields) = value else {
        return Err(vec![FieldError::new(
            "model_attributes_type",
            &["body"],
            "Input should be a valid dictionary or object to extract fields from",
        )]);
    };

    let mut errors = Vec::new();

    let messages = match fields.remove("messages") {
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            errors.push(FieldError::new(
                "list_type",
                &["body", "messages"],
                "Input should be a valid list",
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                "missing",
                &["body", "messages"],
                "Field required",
            ));
            None
        }
    };

    let model = match fields.remove("model") {
        Some(Value::String(model)) => Some(model),
        Some(_) => {
            errors.push(FieldError::new(
                "string_type",
                &["body", "model"],
                "Input should be a valid string",
            ));
            None
        }
        None => None,
    };

    let stream = optional_lax_bool(&fields, "stream").unwrap_or_else(|err| {
        errors.push(err);
        None
    });

    let (Some(messages), true) = (messages, errors.is_empty()) else {
        return Err(errors);
    };

    let mut request = ChatRequest::new(messages);
    if let Some(model) = model {
        request.model = model;
    }
    if let Some(stream) = stream {
        request.stream = stream;
    }
    Ok(request)
}

fn optional_lax_bool(fields: &Map<String, Value>, name: &str) -> Result<Option<bool>, FieldError> {
    match fields.get(name) {
        Some(value) => parse_lax_bool(value, name).map(Some),
        None => Ok(None),
    }
}

/// Accepts booleans plus the usual integer and string spellings of them.
pub fn parse_lax_bool(value: &Value, field: &str) -> Result<bool, FieldError> {
    let parsing_error = || {
        FieldError::new(
            "bool_parsing",
            &["body", field],
            "Input should be a valid boolean, unable to interpret input",
        )
    };

    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => match number.as_f64() {
            Some(n) if n == 0.0 => Ok(false),
            Some(n) if n == 1.0 => Ok(true),
            _ => Err(parsing_error()),
        },
        Value::String(text) => {
            let lowered = text.to_ascii_lowercase();
            if TRUE_STRINGS.contains(&lowered.as_str()) {
                Ok(true)
            } else if FALSE_STRINGS.contains(&lowered.as_str()) {
                Ok(false)
            } else {
                Err(parsing_error())
            }
        }
        _ => Err(FieldError::new(
            "bool_type",
            &["body", field],
            "Input should be a valid boolean",
        )),
    }
}

/// Converts serde_json's 1-based line/column into a byte offset into `body`.
fn error_offset(body: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = body
        .split(|&b| b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(body.len())
}
