use reqwest::StatusCode;
use serde_json::Value;

use business::domain::errors::{FieldErrors, GatewayError};

/// Maps a non-success response to the gateway error the business layer handles.
pub fn error_from_status(status: StatusCode, body: &str) -> GatewayError {
    match status {
        StatusCode::UNAUTHORIZED => GatewayError::unauthorized(),
        StatusCode::NOT_FOUND => GatewayError::not_found(),
        StatusCode::BAD_REQUEST => match field_errors(body) {
            Some(errors) => GatewayError::validation(errors),
            None => GatewayError::Unexpected(status.as_u16()),
        },
        other => GatewayError::Unexpected(other.as_u16()),
    }
}

/// Reads a DRF style error body: `{"field": ["message", ...], "detail": "message"}`.
/// Returns `None` when the body is not a JSON object.
pub fn field_errors(body: &str) -> Option<FieldErrors> {
    let Value::Object(fields) = serde_json::from_str::<Value>(body).ok()? else {
        return None;
    };

    Some(
        fields
            .into_iter()
            .map(|(field, value)| (field, messages(value)))
            .collect(),
    )
}

fn messages(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().flat_map(messages).collect(),
        Value::String(message) => vec![message],
        Value::Null => vec![],
        other => vec![other.to_string()],
    }
}
