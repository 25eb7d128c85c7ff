//! Response decoding
//!
//! Pure functions of `(status, body)`: the HTTP status is the only failure
//! discriminant, and the body is interpreted accordingly.

use hub_application::GatewayError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Where a failure body carries its human-readable message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    /// `error` only (summarize, resources)
    Error,
    /// `message`, then `error` (encyclopedia)
    MessageThenError,
}

impl ErrorField {
    fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Error => &["error"],
            Self::MessageThenError => &["message", "error"],
        }
    }
}

/// Decode a response body into `T`, or into a [`GatewayError`] for non-2xx
/// statuses.
pub fn decode<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
    field: ErrorField,
) -> Result<T, GatewayError> {
    if !status.is_success() {
        let value: Value = serde_json::from_slice(body).map_err(invalid_body)?;
        return Err(GatewayError::Request {
            status: status.as_u16(),
            message: error_message(&value, field),
        });
    }

    serde_json::from_slice(body).map_err(invalid_body)
}

fn invalid_body(e: serde_json::Error) -> GatewayError {
    GatewayError::Transport(format!("Invalid response body: {}", e))
}

/// First string under one of the field's keys that is not blank, verbatim.
fn error_message(value: &Value, field: ErrorField) -> Option<String> {
    field
        .keys()
        .iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .find(|message| !message.trim().is_empty())
        .map(str::to_string)
}
